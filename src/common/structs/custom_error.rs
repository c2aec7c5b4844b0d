#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomError {
    pub message: String,
}
