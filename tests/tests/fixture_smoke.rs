#![forbid(unsafe_code)]

use collection_policy::CollectionDescriptor;
use ed25519_dalek::{Signature, SigningKey, Verifier};
use ledger_protocol::common::{ChannelHeader, Header, HeaderType, Payload};
use ledger_protocol::compute_tx_id;
use ledger_protocol::msp::{msp_principal, MspPrincipal, MspRole};
use ledger_protocol::{canonical_bytes, common};
use ledger_test_utils::{
    make_collection_descriptors, make_deterministic_builder, seeded_nonce, write_temp_file,
    FailingNonceSource, MemoryStore,
};
use prost::Message;
use signer::{Ed25519Signer, StubSigner};
use store_admin::{couch_db_binds, drop_all_databases, start_store, StoreConnectionConfig};
use tx_builder::{BuildError, EnvelopeView, FixtureDefaults, TransactionBuilder};

fn dummy_request(tx_id: Option<&str>) -> tx_builder::TransactionRequest {
    FixtureDefaults::default()
        .request(&[1, 2, 3], tx_id)
        .expect("default request")
}

#[test]
fn dummy_transaction_without_tx_id_is_deterministic() {
    let builder = make_deterministic_builder(11);
    let (envelope, tx_id) = builder
        .build_signed_transaction(&dummy_request(None))
        .expect("build");
    let (_, again) = builder
        .build_signed_transaction(&dummy_request(None))
        .expect("rebuild");

    assert!(!tx_id.is_empty());
    assert_eq!(tx_id, again);
    assert_eq!(tx_id, compute_tx_id(&seeded_nonce(11), b"signer"));

    let payload = Payload::decode(envelope.payload.as_slice()).expect("payload");
    let header: Header = payload.header.expect("header");
    let channel_header =
        ChannelHeader::decode(header.channel_header.as_slice()).expect("channel header");
    assert_eq!(channel_header.channel_id, "dummyChannel");
    assert_eq!(channel_header.tx_id, tx_id);
    assert_eq!(
        channel_header.r#type,
        i32::from(HeaderType::EndorserTransaction)
    );

    let action = EnvelopeView::parse(&envelope)
        .and_then(|view| view.chaincode_action(0))
        .expect("chaincode action");
    assert_eq!(action.results, vec![1, 2, 3]);
    assert_eq!(action.response.map(|r| r.status), Some(200));
}

#[test]
fn supplied_tx_id_is_returned_unchanged() {
    let (envelope, tx_id) = TransactionBuilder::new()
        .build_signed_transaction(&dummy_request(Some("tx-42")))
        .expect("build");
    assert_eq!(tx_id, "tx-42");
    assert_eq!(EnvelopeView::parse(&envelope).expect("view").tx_id(), "tx-42");
}

#[test]
fn nonce_failure_returns_no_envelope() {
    let result = TransactionBuilder::new()
        .with_nonce_source(FailingNonceSource)
        .build_signed_transaction(&dummy_request(Some("tx-42")));
    assert!(matches!(result, Err(BuildError::Nonce(_))));
}

#[test]
fn ed25519_signed_envelope_verifies() {
    let key = SigningKey::from_bytes(&[9u8; 32]);
    let signer = Ed25519Signer::new("Org1MSP", key.clone());
    let (envelope, _) = make_deterministic_builder(5)
        .with_signer(signer)
        .build_signed_transaction(&dummy_request(None))
        .expect("build");

    let signature = Signature::from_slice(&envelope.signature).expect("signature bytes");
    key.verifying_key()
        .verify(&envelope.payload, &signature)
        .expect("envelope signature verifies");

    let view = EnvelopeView::parse(&envelope).expect("view");
    let endorsement = &view.endorsed_action(0).expect("endorsed").endorsements[0];
    assert_eq!(endorsement.endorser, view.signature_header.creator);
}

#[test]
fn stub_signer_swaps_in_behind_the_same_builder() {
    let builder = make_deterministic_builder(5).with_signer(
        StubSigner::new()
            .with_identity("peer0")
            .with_signature("sig0"),
    );
    let (envelope, tx_id) = builder
        .build_signed_transaction(&dummy_request(None))
        .expect("build");
    assert_eq!(envelope.signature, b"sig0");
    assert_eq!(tx_id, compute_tx_id(&seeded_nonce(5), b"peer0"));
}

#[test]
fn collection_descriptors_roundtrip_through_policy_bytes() {
    let descriptors = make_collection_descriptors();
    let bytes = collection_policy::encode(&descriptors).expect("encode");
    assert_eq!(collection_policy::decode(&bytes).expect("decode"), descriptors);
}

#[test]
fn role_and_raw_principals_decode_alike() {
    let role = MspPrincipal {
        principal_classification: msp_principal::Classification::Role.into(),
        principal: canonical_bytes(&MspRole {
            msp_identifier: "Org1MSP".to_string(),
            role: 0,
        }),
    };
    let raw = MspPrincipal {
        principal_classification: msp_principal::Classification::Identity.into(),
        principal: b"Org2MSP".to_vec(),
    };
    let package = common::CollectionConfigPackage {
        config: vec![common::CollectionConfig {
            payload: Some(common::collection_config::Payload::StaticCollectionConfig(
                common::StaticCollectionConfig {
                    name: "mixed".to_string(),
                    block_to_live: 3,
                    member_orgs_policy: Some(common::CollectionPolicyConfig {
                        payload: Some(common::collection_policy_config::Payload::SignaturePolicy(
                            common::SignaturePolicyEnvelope {
                                version: 0,
                                rule: None,
                                identities: vec![role, raw],
                            },
                        )),
                    }),
                    ..Default::default()
                },
            )),
        }],
    };

    let decoded = collection_policy::decode(&canonical_bytes(&package)).expect("decode");
    assert_eq!(
        decoded,
        vec![CollectionDescriptor::new("mixed", 3, &["Org1MSP", "Org2MSP"])]
    );
}

#[test]
fn descriptors_load_from_yaml() {
    let path = write_temp_file(
        "collections.yaml",
        "- name: coll1\n  time_to_live: 0\n  members: [Org1MSP, Org2MSP]\n\
         - name: coll2\n  time_to_live: 10\n  members: [Org2MSP, Org3MSP]\n",
    )
    .expect("write descriptors");
    assert_eq!(
        collection_policy::load_descriptors(&path).expect("load"),
        make_collection_descriptors()
    );
}

#[test]
fn genesis_block_marks_every_transaction_valid() {
    let block = genesis::build_genesis_block("ledger1").expect("genesis");
    let tx_count = block.data.as_ref().map_or(0, |data| data.data.len());
    let flags = genesis::transactions_filter(&block);
    assert_eq!(flags.len(), tx_count);
    assert!((0..tx_count).all(|i| flags.is_valid(i)));
}

#[test]
fn store_setup_and_teardown() {
    let store = MemoryStore::with_databases(&["_replicator", "_users", "ledger1_", "ledger1_ns"]);
    let binds = couch_db_binds(
        &ledger_test_utils::scratch_dir("couch-data"),
        &ledger_test_utils::scratch_dir("couch-local.d"),
    );
    {
        let handle = start_store(&store, &binds).expect("start store");
        let config = StoreConnectionConfig::new(handle.address());
        let dropped = drop_all_databases(&store, &config).expect("drop databases");
        assert_eq!(dropped.len(), 2);
        assert_eq!(store.databases(), vec!["_replicator", "_users"]);
    }
    assert_eq!(store.stop_count(), 1);
}
