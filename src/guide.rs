//! Static integration documentation payloads.
//!
//! Everything here is fixed reference content for a hosting layer to serve
//! verbatim — provider endpoints, required API methods, webhook flows, error
//! codes, and security guidance. The payloads are plain `serde_json::Value`
//! trees: deterministic, no I/O, no state.

use serde_json::{Value, json};

/// Payme merchant-API integration guide.
///
/// Payme's merchant API is JSON-RPC 2.0; a merchant backend must implement
/// the six methods listed here and drive the documented transaction states.
#[must_use]
pub fn payme_integration() -> Value {
    json!({
        "overview": "Payme uses JSON-RPC 2.0 protocol for the merchant API",
        "merchant_api_url": "https://checkout.paycom.uz/api",
        "test_merchant_api_url": "https://checkout.test.paycom.uz/api",
        "required_methods": {
            "CheckPerformTransaction": {
                "description": "Validate that a transaction can be performed",
                "params": ["account", "amount"],
            },
            "CreateTransaction": {
                "description": "Create a new transaction",
                "params": ["id", "time", "amount", "account"],
            },
            "PerformTransaction": {
                "description": "Complete the transaction",
                "params": ["id"],
            },
            "CancelTransaction": {
                "description": "Cancel a transaction",
                "params": ["id", "reason"],
            },
            "CheckTransaction": {
                "description": "Check transaction status",
                "params": ["id"],
            },
            "GetStatement": {
                "description": "List transactions in a time range",
                "params": ["from", "to"],
            },
        },
        "transaction_states": {
            "1": "Pending (created, awaiting perform)",
            "2": "Paid (successfully completed)",
            "-1": "Cancelled (cancelled before payment)",
            "-2": "Cancelled after payment (refunded)",
        },
        "error_codes": {
            "-31050 to -31099": "Account/order not found or invalid",
            "-31001": "Invalid amount",
            "-31008": "Cannot perform operation (duplicate transaction)",
            "-32504": "Invalid authorization",
        },
        "webhook_authentication": {
            "method": "Basic Authentication",
            "format": "Basic base64(merchant_id:merchant_key)",
            "note": "Always verify the merchant key in the decoded credentials",
        },
        "best_practices": [
            "Store transaction IDs as strings, they can be very large numbers",
            "Implement idempotency for CreateTransaction",
            "Always return HTTP 200 for webhook responses",
            "Use a state machine for transaction status management",
            "Validate amounts in tiyin (1 UZS = 100 tiyin)",
            "Set payment expiration based on the order date",
        ],
    })
}

/// Click integration guide: two-phase flow, webhook responses, error codes.
#[must_use]
pub fn click_integration() -> Value {
    json!({
        "overview": "Click uses a two-phase payment flow (prepare and complete)",
        "merchant_api_docs": "https://docs.click.uz/",
        "payment_flow": [
            "Generate the invoice URL and redirect the payer",
            "Payer completes payment on the Click page",
            "Click sends the prepare webhook (action=0)",
            "Merchant validates and responds",
            "Click sends the complete webhook (action=1)",
            "Merchant finalizes the transaction",
        ],
        "webhook_endpoints": {
            "prepare": {
                "action": 0,
                "description": "Pre-validate the transaction before the charge",
                "required_response": {
                    "click_trans_id": "transaction_id",
                    "merchant_trans_id": "your_id",
                    "merchant_prepare_id": "prepare_id",
                    "error": 0,
                    "error_note": "Success",
                },
            },
            "complete": {
                "action": 1,
                "description": "Finalize the payment after a successful charge",
                "required_response": {
                    "click_trans_id": "transaction_id",
                    "merchant_trans_id": "your_id",
                    "merchant_confirm_id": "confirm_id",
                    "error": 0,
                    "error_note": "Success",
                },
            },
        },
        "error_codes": {
            "0": "Success",
            "-1": "Sign check failed",
            "-2": "Invalid amount",
            "-3": "Action not found",
            "-4": "Already paid",
            "-5": "User not found",
            "-6": "Transaction not found",
            "-7": "Failed to update user",
            "-8": "Error in request from Click",
            "-9": "Transaction cancelled",
        },
        "signature_generation": {
            "algorithm": "MD5",
            "format": "MD5(click_trans_id + service_id + secret_key + merchant_trans_id + amount + action + sign_time)",
        },
        "best_practices": [
            "Always verify webhook signatures",
            "Implement idempotency for both prepare and complete",
            "Store Click transaction IDs for reconciliation",
            "Return proper error codes for validation failures",
            "Log all webhook requests for debugging",
        ],
    })
}

/// Octo integration guide: endpoints, statuses, signature formats.
#[must_use]
pub fn octo_integration() -> Value {
    json!({
        "overview": "Octo is a modern payment gateway with a REST API",
        "api_docs": "https://docs.octo.uz/",
        "base_url_production": "https://api.octo.uz",
        "base_url_test": "https://api.test.octo.uz",
        "payment_flow": [
            "Initialize the payment via the API",
            "Redirect the payer to pay_url",
            "Payer completes payment",
            "Octo sends the webhook notification",
            "Verify the webhook signature",
            "Update the transaction status",
        ],
        "api_endpoints": {
            "init_payment": { "path": "/v1/payment/init", "method": "POST" },
            "check_status": { "path": "/v1/payment/status/{uuid}", "method": "GET" },
            "capture": { "path": "/v1/payment/capture", "method": "POST" },
            "refund": { "path": "/v1/payment/refund", "method": "POST" },
        },
        "payment_statuses": {
            "created": "Payment created, awaiting user action",
            "processing": "Payment is being processed",
            "succeeded": "Payment completed successfully",
            "cancelled": "Payment cancelled by user or timeout",
            "failed": "Payment failed",
        },
        "signature_generation": {
            "algorithm": "SHA-256",
            "init_format": "SHA256(transaction_id + amount + currency + secret_key)",
            "webhook_format": "SHA256(octo_payment_UUID + status + secret_key)",
        },
        "features": {
            "card_tokenization": "Save cards for recurring payments",
            "auto_capture": "Automatic or manual payment capture",
            "refunds": "Partial and full refund support",
            "3ds": "3D Secure authentication support",
        },
    })
}

/// Side-by-side comparison of the three providers.
#[must_use]
pub fn provider_comparison() -> Value {
    json!({
        "providers": {
            "payme": {
                "protocol": "JSON-RPC 2.0",
                "complexity": "medium",
                "transaction_flow": "six required merchant-API methods",
                "webhook_auth": "Basic Auth with merchant key",
                "best_for": "large enterprises, official payments",
                "market_share": "highest, most trusted in Uzbekistan",
            },
            "click": {
                "protocol": "REST with two-phase commit",
                "complexity": "low-medium",
                "transaction_flow": "two webhooks (prepare + complete)",
                "webhook_auth": "keyed MD5 signature",
                "best_for": "e-commerce and booking platforms",
                "market_share": "high, very popular",
            },
            "octo": {
                "protocol": "modern REST",
                "complexity": "low",
                "transaction_flow": "single webhook notification",
                "webhook_auth": "keyed SHA-256 signature",
                "best_for": "modern apps, SaaS, recurring payments",
                "market_share": "growing, newest player",
            },
        },
        "recommendation": {
            "maximum_coverage": "Payme + Click covers most of the market",
            "fastest_integration": "Octo or Click",
            "enterprise": "Payme is essential",
        },
    })
}

/// Security checklist for payment integrations.
#[must_use]
pub fn security_practices() -> Value {
    json!({
        "webhook_security": [
            "Never trust webhooks without signature verification",
            "Accept webhooks over HTTPS only",
            "Whitelist provider IP addresses where possible",
            "Keep an audit trail of all payment webhooks",
            "Rate-limit webhook endpoints",
        ],
        "data_protection": [
            "Never store card numbers; use tokenization",
            "Encrypt transaction details at rest",
            "Follow PCI DSS when handling card data",
            "Collect only the information you need",
        ],
        "transaction_security": [
            "Prevent duplicate payments with idempotency keys",
            "Use atomic database transactions",
            "Set appropriate payment timeouts",
            "Enforce strict state transitions",
            "Reconcile regularly with the provider",
        ],
        "fraud_prevention": [
            "Verify payment amounts against orders",
            "Ensure the user owns the transaction",
            "Detect duplicate transactions",
            "Monitor unusual payment patterns",
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guides_are_deterministic() {
        assert_eq!(payme_integration(), payme_integration());
        assert_eq!(click_integration(), click_integration());
        assert_eq!(octo_integration(), octo_integration());
        assert_eq!(provider_comparison(), provider_comparison());
        assert_eq!(security_practices(), security_practices());
    }

    #[test]
    fn test_payme_guide_lists_all_required_methods() {
        let guide = payme_integration();
        let methods = guide["required_methods"].as_object().unwrap();
        for name in [
            "CheckPerformTransaction",
            "CreateTransaction",
            "PerformTransaction",
            "CancelTransaction",
            "CheckTransaction",
            "GetStatement",
        ] {
            assert!(methods.contains_key(name), "missing {name}");
        }
    }

    #[test]
    fn test_click_guide_documents_signature_format() {
        let guide = click_integration();
        assert_eq!(guide["signature_generation"]["algorithm"], "MD5");
        assert!(
            guide["signature_generation"]["format"]
                .as_str()
                .unwrap()
                .starts_with("MD5(click_trans_id")
        );
    }

    #[test]
    fn test_octo_guide_documents_endpoints() {
        let guide = octo_integration();
        assert_eq!(guide["base_url_production"], "https://api.octo.uz");
        assert_eq!(guide["base_url_test"], "https://api.test.octo.uz");
        assert_eq!(guide["api_endpoints"]["init_payment"]["path"], "/v1/payment/init");
    }

    #[test]
    fn test_comparison_covers_all_providers() {
        let comparison = provider_comparison();
        let providers = comparison["providers"].as_object().unwrap();
        assert_eq!(providers.len(), 3);
        for name in ["payme", "click", "octo"] {
            assert!(providers.contains_key(name));
        }
    }
}
