use alloy::{contract::Error, transports::RpcError};
use eyre::{eyre, ErrReport};

/// Converts a contract error into a report with a readable message.
pub fn contract_error_report(error: Error) -> ErrReport {
    match error {
        Error::UnknownFunction(function) => {
            eyre!("Unknown function: function {} does not exist", function)
        }
        Error::UnknownSelector(selector) => eyre!(
            "Unknown function: function with selector {} does not exist",
            selector
        ),
        Error::NotADeploymentTransaction => eyre!("Transaction is not a deployment transaction"),
        Error::ContractNotDeployed => eyre!("Contract is not deployed"),
        Error::AbiError(e) => eyre!("An error occurred ABI encoding or decoding: {}", e),
        Error::TransportError(error) => {
            if let RpcError::ErrorResp(payload) = error {
                eyre!("Contract call reverted: {}", payload.message)
            } else {
                eyre!("Transport error: {}", error)
            }
        }
    }
}
