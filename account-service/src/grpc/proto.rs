//! Messages and stubs generated from `proto/accounts/v1/accounts.proto`

tonic::include_proto!("accounts.v1");
