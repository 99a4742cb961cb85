//! Asynchronous client: one backend capability, one network exchange.

use tracing::debug;

use crate::client::MarsClient;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::outcome::Outcome;
use crate::transport::{Transport, UreqTransport};
use crate::types::{
    About, EventBrief, EventFull, Item, ItemToSend, Roadster, RocketBrief, RocketFull,
};

/// Asynchronous client for the Mars API.
///
/// Each operation builds a request with `MarsClient`, performs exactly one
/// `Transport::send` and interprets the response. The client holds no
/// mutable state, so concurrent calls on the same `&Client` are
/// independent. Ordering between dependent calls (e.g. sending and then
/// cancelling the same item) is up to the caller.
///
/// JSON operations resolve to `Outcome::Absent` on a non-2xx status.
/// `get_user` and `login_user` always resolve to the body text. `Err` is
/// reserved for transport failures and malformed success bodies.
#[derive(Debug, Clone)]
pub struct Client<T> {
    codec: MarsClient,
    transport: T,
}

impl Client<UreqTransport> {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url, UreqTransport::new())
    }
}

impl<T: Transport> Client<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            codec: MarsClient::new(base_url),
            transport,
        }
    }

    pub fn codec(&self) -> &MarsClient {
        &self.codec
    }

    /// Username of the current session, or whatever text the backend sends
    /// when nobody is logged in. `User::from_session_text` tells the two
    /// apart.
    ///
    /// ```no_run
    /// # async fn demo() -> Result<(), mars_client::ClientError> {
    /// use mars_client::{Client, UreqTransport, User};
    ///
    /// let client = Client::new("http://localhost:3000", UreqTransport::new());
    /// let user = User::from_session_text(&client.get_user().await?);
    /// if !user.is_logged_in() {
    ///     client.login_user("alice").await?;
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_user(&self) -> Result<String, ClientError> {
        let response = self.transport.send(self.codec.build_get_user()).await?;
        Ok(self.codec.parse_get_user(response))
    }

    pub async fn login_user(&self, username: &str) -> Result<String, ClientError> {
        debug!(username, "logging in");
        let response = self
            .transport
            .send(self.codec.build_login_user(username))
            .await?;
        Ok(self.codec.parse_login_user(response))
    }

    /// Best effort: the response is discarded whatever its status.
    pub async fn logout_user(&self) -> Result<(), ClientError> {
        let response = self.transport.send(self.codec.build_logout_user()).await?;
        self.codec.parse_logout_user(response);
        Ok(())
    }

    pub async fn get_info(&self) -> Result<Outcome<About>, ClientError> {
        let response = self.transport.send(self.codec.build_get_info()).await?;
        self.codec.parse_get_info(response)
    }

    pub async fn get_history(&self) -> Result<Outcome<Vec<EventBrief>>, ClientError> {
        let response = self.transport.send(self.codec.build_get_history()).await?;
        self.codec.parse_get_history(response)
    }

    pub async fn get_history_event(&self, id: u64) -> Result<Outcome<EventFull>, ClientError> {
        let response = self
            .transport
            .send(self.codec.build_get_history_event(id))
            .await?;
        self.codec.parse_get_history_event(response)
    }

    pub async fn get_rockets(&self) -> Result<Outcome<Vec<RocketBrief>>, ClientError> {
        let response = self.transport.send(self.codec.build_get_rockets()).await?;
        self.codec.parse_get_rockets(response)
    }

    pub async fn get_rocket(&self, id: &str) -> Result<Outcome<RocketFull>, ClientError> {
        let response = self.transport.send(self.codec.build_get_rocket(id)).await?;
        self.codec.parse_get_rocket(response)
    }

    pub async fn get_roadster(&self) -> Result<Outcome<Roadster>, ClientError> {
        let response = self.transport.send(self.codec.build_get_roadster()).await?;
        self.codec.parse_get_roadster(response)
    }

    pub async fn get_sent_to_mars(&self) -> Result<Outcome<Vec<Item>>, ClientError> {
        let response = self
            .transport
            .send(self.codec.build_get_sent_to_mars())
            .await?;
        self.codec.parse_get_sent_to_mars(response)
    }

    /// Resolves to the whole dispatch queue after the send. Replace any
    /// local copy with it rather than appending.
    pub async fn send_to_mars(&self, item: &ItemToSend) -> Result<Outcome<Vec<Item>>, ClientError> {
        let request = self.codec.build_send_to_mars(item)?;
        let response = self.transport.send(request).await?;
        self.codec.parse_send_to_mars(response)
    }

    /// Resolves to the whole dispatch queue after the cancellation.
    pub async fn cancel_sending_to_mars(
        &self,
        item: &Item,
    ) -> Result<Outcome<Vec<Item>>, ClientError> {
        let request = self.codec.build_cancel_sending_to_mars(item)?;
        let response = self.transport.send(request).await?;
        self.codec.parse_cancel_sending_to_mars(response)
    }
}
