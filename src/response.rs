//! The shared GlobalIdentity response envelope.
//!
//! Every endpoint answers with a `Success` flag and an `OperationReport`
//! list of failure messages, either as the whole body or flattened into a
//! larger response. [`ServiceResponse::validate`] is the single place where
//! that flag is turned into a success or an error.

use crate::error::{ClientError, Result};
use serde::Deserialize;

/// The base response of GlobalIdentity.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceResponse {
    /// Whether the service accepted the operation.
    pub success: bool,
    /// Failure messages accompanying a rejection.
    #[serde(default)]
    pub operation_report: Vec<String>,
}

impl ServiceResponse {
    /// Check success of the response.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] carrying the `OperationReport`
    /// messages when the service flagged the operation as failed.
    pub fn validate(self) -> Result<()> {
        if self.success {
            Ok(())
        } else {
            Err(ClientError::Rejected {
                report: self.operation_report,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_passes_on_success() {
        let response: ServiceResponse =
            serde_json::from_str(r#"{"Success": true, "OperationReport": []}"#).unwrap();
        assert!(response.validate().is_ok());
    }

    #[test]
    fn validate_fails_with_report() {
        let response: ServiceResponse =
            serde_json::from_str(r#"{"Success": false, "OperationReport": ["user not found"]}"#)
                .unwrap();

        match response.validate() {
            Err(ClientError::Rejected { report }) => {
                assert_eq!(report, vec!["user not found".to_string()]);
            }
            other => panic!("expected Rejected error, got {:?}", other),
        }
    }

    #[test]
    fn operation_report_defaults_to_empty() {
        let response: ServiceResponse = serde_json::from_str(r#"{"Success": false}"#).unwrap();
        assert!(response.operation_report.is_empty());
        assert!(response.validate().is_err());
    }
}
