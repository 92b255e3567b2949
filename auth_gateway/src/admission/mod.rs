mod domain;
mod errors;
mod ip;
mod origin;

pub use domain::check_account_domain;
pub use errors::AdmissionError;
pub use ip::check_source_ip;
pub use origin::resolve_redirect_url;
