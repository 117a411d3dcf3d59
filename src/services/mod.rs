pub mod http;
pub mod api_client;
pub mod notifier;

pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use api_client::ApiClient;
pub use notifier::Notifier;

#[cfg(target_arch = "wasm32")]
pub use http::BrowserHttpClient;
#[cfg(target_arch = "wasm32")]
pub use notifier::BrowserNotifier;
