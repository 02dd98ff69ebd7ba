pub mod checkout_revisions;
pub mod fetch_packages;
pub mod install_packages;

pub use checkout_revisions::{
    CheckoutOutcome, CheckoutReport, CheckoutRevisionsConfig, CheckoutRevisionsUseCase,
};
pub use fetch_packages::{FetchOutcome, FetchPackagesConfig, FetchPackagesUseCase, FetchReport};
pub use install_packages::{InstallPackagesConfig, InstallPackagesUseCase, InstallReport};
