pub mod provisioning_service;
pub mod verification_service;
