#![forbid(unsafe_code)]

use collection_policy::CollectionDescriptor;
use ledger_protocol::common::{
    Block, ChannelHeader, CollectionConfigPackage, Envelope, Header, HeaderType, SignatureHeader,
    Timestamp,
};
use ledger_protocol::msp::{msp_principal, MspPrincipal};
use ledger_protocol::peer::{
    ChaincodeHeaderExtension, ChaincodeId, ChaincodeProposalPayload, ProposalResponse, Response,
    SignedProposal,
};
use ledger_protocol::rwset::TxPvtReadWriteSet;
use ledger_protocol::{canonical_bytes, proposal_hash};
use prost::Message;

fn assert_roundtrip<T>(value: T)
where
    T: Message + Default + Clone + PartialEq,
{
    let encoded = value.encode_to_vec();
    let decoded = T::decode(encoded.as_slice()).expect("decode roundtrip");
    assert_eq!(value, decoded);
    assert_eq!(canonical_bytes(&value), canonical_bytes(&decoded));
}

#[test]
fn fixture_messages_roundtrip_deterministically() {
    let builder = ledger_test_utils::make_deterministic_builder(3);
    let fixture = ledger_test_utils::make_tx_and_pvtdata(&builder, "tx-smoke", &[("ns", "coll")])
        .expect("fixture");
    let package =
        collection_policy::to_package(&ledger_test_utils::make_collection_descriptors());
    let block = genesis::build_genesis_block("smoke").expect("genesis");

    assert_roundtrip::<Envelope>(fixture.envelope);
    assert_roundtrip::<TxPvtReadWriteSet>(fixture.pvt_rwset.expect("private writes"));
    assert_roundtrip::<CollectionConfigPackage>(package);
    assert_roundtrip::<Block>(block);
    assert_roundtrip(SignedProposal {
        proposal_bytes: vec![1, 2, 3],
        signature: b"signature".to_vec(),
    });
    assert_roundtrip(MspPrincipal {
        principal_classification: msp_principal::Classification::Identity.into(),
        principal: b"Org1MSP".to_vec(),
    });
}

#[test]
fn field_numbers_match_the_ledger_schema() {
    let envelope = Envelope {
        payload: vec![1],
        signature: vec![2],
    };
    assert_eq!(canonical_bytes(&envelope), vec![0x0a, 1, 1, 0x12, 1, 2]);

    // response is field 4; nothing occupies field 3
    let response = ProposalResponse {
        response: Some(Response {
            status: 200,
            ..Default::default()
        }),
        ..Default::default()
    };
    assert_eq!(canonical_bytes(&response), vec![0x22, 3, 0x08, 0xc8, 0x01]);

    let extension = ChaincodeHeaderExtension {
        chaincode_id: Some(ChaincodeId {
            name: "a".to_string(),
            ..Default::default()
        }),
    };
    assert_eq!(canonical_bytes(&extension), vec![0x12, 3, 0x12, 1, b'a']);
}

#[test]
fn collection_package_matches_golden_bytes() {
    let bytes = collection_policy::encode(&[CollectionDescriptor::new("c", 5, &["A"])])
        .expect("encode");
    let expected: [u8; 34] = [
        0x0a, 0x20, 0x0a, 0x1e, 0x0a, 0x01, 0x63, 0x12, 0x17, 0x0a, 0x15, 0x12, 0x0c, 0x12, 0x0a,
        0x08, 0x01, 0x12, 0x02, 0x08, 0x00, 0x12, 0x02, 0x08, 0x01, 0x1a, 0x05, 0x08, 0x02, 0x12,
        0x01, 0x41, 0x28, 0x05,
    ];
    assert_eq!(bytes, expected);
}

fn golden_header() -> Header {
    Header {
        channel_header: canonical_bytes(&ChannelHeader {
            r#type: HeaderType::EndorserTransaction.into(),
            timestamp: Some(Timestamp {
                seconds: 1,
                nanos: 0,
            }),
            channel_id: "ch".to_string(),
            tx_id: "t".to_string(),
            ..Default::default()
        }),
        signature_header: canonical_bytes(&SignatureHeader {
            creator: b"c".to_vec(),
            nonce: vec![1, 2],
        }),
    }
}

#[test]
fn headers_match_golden_bytes() {
    let header = golden_header();
    assert_eq!(
        header.channel_header,
        vec![0x08, 0x03, 0x1a, 0x02, 0x08, 0x01, 0x22, 0x02, b'c', b'h', 0x2a, 0x01, b't']
    );
    assert_eq!(
        header.signature_header,
        vec![0x0a, 0x01, b'c', 0x12, 0x02, 0x01, 0x02]
    );
}

#[test]
fn proposal_hash_matches_golden_digest() {
    let mut payload = ChaincodeProposalPayload {
        input: b"in".to_vec(),
        transient_map: Default::default(),
    };
    payload
        .transient_map
        .insert("secret".to_string(), b"x".to_vec());

    // sha256(channel_header || signature_header || 0a 02 'i' 'n')
    assert_eq!(
        hex::encode(proposal_hash(&golden_header(), &payload)),
        "765886957e6ad7fdb28ca2bf91f8567e2a7aaf7c7207329e4469da7be5e153a0"
    );
}
