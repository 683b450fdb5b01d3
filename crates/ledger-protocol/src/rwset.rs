//! Messages from the ledger's `rwset` protobuf package.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxPvtReadWriteSet {
    #[prost(enumeration = "DataModel", tag = "1")]
    pub data_model: i32,
    #[prost(message, repeated, tag = "2")]
    pub ns_pvt_rwset: ::prost::alloc::vec::Vec<NsPvtReadWriteSet>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NsPvtReadWriteSet {
    #[prost(string, tag = "1")]
    pub namespace: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub collection_pvt_rwset: ::prost::alloc::vec::Vec<CollectionPvtReadWriteSet>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CollectionPvtReadWriteSet {
    #[prost(string, tag = "1")]
    pub collection_name: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "2")]
    pub rwset: ::prost::alloc::vec::Vec<u8>,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DataModel {
    Kv = 0,
}
impl DataModel {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            DataModel::Kv => "KV",
        }
    }
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "KV" => Some(Self::Kv),
            _ => None,
        }
    }
}
