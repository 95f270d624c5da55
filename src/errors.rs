#[derive(Debug)]
pub enum VendingMachineError {
    FileReaderError,
    InvalidOrdersFile,
}

impl From<std::io::Error> for VendingMachineError {
    fn from(_: std::io::Error) -> Self {
        VendingMachineError::FileReaderError
    }
}

impl From<serde_json::Error> for VendingMachineError {
    fn from(_: serde_json::Error) -> Self {
        VendingMachineError::InvalidOrdersFile
    }
}
