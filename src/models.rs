use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const SAMPLE_NETWORK: &str = "testnet";
pub const SAMPLE_CONTRACT_PATH: &str = "src/dapp_examples/smart_contract.sol";
pub const SAMPLE_CONTRACT_ADDRESS: &str = "0x1234567890abcdef1234567890abcdef12345678";
pub const SAMPLE_RECIPIENT: &str = "0xabcdef1234567890abcdef1234567890abcdef12";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployRequest {
    pub contract_path: String,
    pub network: String,
}

impl DeployRequest {
    pub fn sample() -> Self {
        Self {
            contract_path: SAMPLE_CONTRACT_PATH.to_string(),
            network: SAMPLE_NETWORK.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRequest {
    pub contract_address: String,
    pub function_name: String,
    /// Function arguments, keyed by parameter name.
    pub params: Value,
    pub network: String,
}

impl CallRequest {
    pub fn sample() -> Self {
        Self {
            contract_address: SAMPLE_CONTRACT_ADDRESS.to_string(),
            function_name: "transfer".to_string(),
            params: json!({
                "to": SAMPLE_RECIPIENT,
                "amount": 100
            }),
            network: SAMPLE_NETWORK.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deploy_sample_encodes_expected_body() {
        let body = serde_json::to_value(DeployRequest::sample()).unwrap();
        assert_eq!(
            body,
            json!({
                "contract_path": "src/dapp_examples/smart_contract.sol",
                "network": "testnet"
            })
        );
    }

    #[test]
    fn call_sample_encodes_expected_body() {
        let body = serde_json::to_value(CallRequest::sample()).unwrap();
        assert_eq!(
            body,
            json!({
                "contract_address": "0x1234567890abcdef1234567890abcdef12345678",
                "function_name": "transfer",
                "params": {
                    "to": "0xabcdef1234567890abcdef1234567890abcdef12",
                    "amount": 100
                },
                "network": "testnet"
            })
        );
    }

    #[test]
    fn call_params_keep_integer_amount() {
        let req = CallRequest::sample();
        assert_eq!(req.params["amount"].as_u64(), Some(100));
    }
}
