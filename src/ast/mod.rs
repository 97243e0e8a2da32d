/// AST (Abstract Syntax Tree) module
/// Contains the expression tree produced by the parser
///
/// Submodules:
/// - ast: The `Node` sum type, its constructors and its printer
pub mod ast;
