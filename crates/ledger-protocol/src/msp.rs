//! Messages from the ledger's `msp` protobuf package.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SerializedIdentity {
    #[prost(string, tag = "1")]
    pub mspid: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "2")]
    pub id_bytes: ::prost::alloc::vec::Vec<u8>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MspPrincipal {
    #[prost(enumeration = "msp_principal::Classification", tag = "1")]
    pub principal_classification: i32,
    #[prost(bytes = "vec", tag = "2")]
    pub principal: ::prost::alloc::vec::Vec<u8>,
}
pub mod msp_principal {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Classification {
        Role = 0,
        OrganizationUnit = 1,
        Identity = 2,
        Anonymity = 3,
        Combined = 4,
    }
    impl Classification {
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Classification::Role => "ROLE",
                Classification::OrganizationUnit => "ORGANIZATION_UNIT",
                Classification::Identity => "IDENTITY",
                Classification::Anonymity => "ANONYMITY",
                Classification::Combined => "COMBINED",
            }
        }
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "ROLE" => Some(Self::Role),
                "ORGANIZATION_UNIT" => Some(Self::OrganizationUnit),
                "IDENTITY" => Some(Self::Identity),
                "ANONYMITY" => Some(Self::Anonymity),
                "COMBINED" => Some(Self::Combined),
                _ => None,
            }
        }
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MspRole {
    #[prost(string, tag = "1")]
    pub msp_identifier: ::prost::alloc::string::String,
    #[prost(enumeration = "msp_role::MspRoleType", tag = "2")]
    pub role: i32,
}
pub mod msp_role {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum MspRoleType {
        Member = 0,
        Admin = 1,
        Client = 2,
        Peer = 3,
        Orderer = 4,
    }
    impl MspRoleType {
        pub fn as_str_name(&self) -> &'static str {
            match self {
                MspRoleType::Member => "MEMBER",
                MspRoleType::Admin => "ADMIN",
                MspRoleType::Client => "CLIENT",
                MspRoleType::Peer => "PEER",
                MspRoleType::Orderer => "ORDERER",
            }
        }
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "MEMBER" => Some(Self::Member),
                "ADMIN" => Some(Self::Admin),
                "CLIENT" => Some(Self::Client),
                "PEER" => Some(Self::Peer),
                "ORDERER" => Some(Self::Orderer),
                _ => None,
            }
        }
    }
}
