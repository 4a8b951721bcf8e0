//! Async requester client for the Mechanical Turk API.
//!
//! Every operation goes through one [`RequestGateway`]: it signs the call
//! with HMAC-SHA1, POSTs the form-encoded parameters, parses the XML reply,
//! and turns any `Errors` block into [`MTurkError::Api`] before the typed
//! output is extracted.
//!
//! ```no_run
//! use rusturk_client::{MTurkClient, MTurkConfig};
//!
//! # async fn run() -> Result<(), rusturk_client::MTurkError> {
//! let config = MTurkConfig::builder()
//!     .access_key_id("AKIDEXAMPLE")
//!     .secret_access_key("secret")
//!     .sandbox(true)
//!     .build();
//! let client = MTurkClient::new(&config)?;
//! let balance = client.get_account_balance().await?;
//! println!("{}", balance.available_balance);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod gateway;
mod transport;

#[cfg(test)]
mod testing;

pub use client::MTurkClient;
pub use error::{MTurkError, MTurkResult};
pub use gateway::{RESERVED_PARAMETERS, RequestGateway, encode_form};
pub use transport::{
    FORM_CONTENT_TYPE, HttpTransport, ReqwestTransport, TransportError, TransportFuture,
    TransportRequest, TransportResponse,
};

pub use rusturk_core::{Credentials, Endpoint, MTurkConfig};
pub use rusturk_model::types::{Comparator, QualificationRequirement, qualification_requirement};
pub use rusturk_model::{ApiError, MTurkOperation, Parameters, input, output, types};
pub use rusturk_xml::XmlElement;

use rusturk_model::types::ExternalQuestion;

/// Build the `ExternalQuestion` document for a HIT's `Question` parameter.
///
/// `frame_height` defaults to 800 pixels.
///
/// # Errors
///
/// Returns [`MTurkError::Question`] for an empty URL or a zero frame height.
pub fn external_question(url: &str, frame_height: Option<u32>) -> MTurkResult<String> {
    let mut question = ExternalQuestion::new(url);
    if let Some(height) = frame_height {
        question = question.with_frame_height(height);
    }
    rusturk_xml::external_question_xml(&question).map_err(MTurkError::Question)
}

const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MTurkClient>();
    assert_send_sync::<RequestGateway>();
    assert_send_sync::<MTurkError>();
};
