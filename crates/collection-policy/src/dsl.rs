//! Builders for signature policies over an indexed identity list.

use ledger_protocol::common::{signature_policy, SignaturePolicy, SignaturePolicyEnvelope};
use ledger_protocol::msp::{msp_principal, MspPrincipal};

/// Satisfied by a signature from the identity at `index`.
pub fn signed_by(index: i32) -> SignaturePolicy {
    SignaturePolicy {
        r#type: Some(signature_policy::Type::SignedBy(index)),
    }
}

/// Satisfied when at least `n` of `rules` are satisfied.
pub fn n_out_of(n: i32, rules: Vec<SignaturePolicy>) -> SignaturePolicy {
    SignaturePolicy {
        r#type: Some(signature_policy::Type::NOutOf(signature_policy::NOutOf {
            n,
            rules,
        })),
    }
}

pub fn or(lhs: SignaturePolicy, rhs: SignaturePolicy) -> SignaturePolicy {
    n_out_of(1, vec![lhs, rhs])
}

pub fn and(lhs: SignaturePolicy, rhs: SignaturePolicy) -> SignaturePolicy {
    n_out_of(2, vec![lhs, rhs])
}

/// Wraps `rule` with its identity list. Each identity is carried as an
/// `IDENTITY`-classified principal holding the given bytes verbatim.
pub fn envelope(rule: SignaturePolicy, identities: Vec<Vec<u8>>) -> SignaturePolicyEnvelope {
    SignaturePolicyEnvelope {
        version: 0,
        rule: Some(rule),
        identities: identities
            .into_iter()
            .map(|principal| MspPrincipal {
                principal_classification: msp_principal::Classification::Identity.into(),
                principal,
            })
            .collect(),
    }
}
