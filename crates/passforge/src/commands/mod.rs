pub mod combine;
pub mod corpo;
pub mod hash;
pub mod mangle;
pub mod mask;
pub mod passphrase;
pub mod profile;
pub mod random;
