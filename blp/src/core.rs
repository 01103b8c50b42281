use blp_core::{
    BlpError, HistoricalDefaults, Request, SessionConfig, Transport, collect,
};

/// Adapter exposing point, bulk, and historical lookups over one session.
///
/// The service owns a single transport and serializes every call on it.
/// It is disconnected on drop as a last resort; prefer [`session`] or
/// [`with_session`] for scoped use.
///
/// [`session`]: BlpService::session
/// [`with_session`]: BlpService::with_session
pub struct BlpService<T: Transport> {
    pub(crate) transport: T,
    pub(crate) cfg: SessionConfig,
    pub(crate) historical_defaults: HistoricalDefaults,
    connected: bool,
}

/// Builder for constructing a `BlpService` with custom configuration.
pub struct BlpServiceBuilder<T: Transport> {
    transport: T,
    cfg: SessionConfig,
    historical_defaults: HistoricalDefaults,
}

impl<T: Transport> BlpServiceBuilder<T> {
    /// Create a new builder around `transport` with default endpoint settings
    /// (`localhost:8194`, `//blp/refdata`).
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            cfg: SessionConfig::default(),
            historical_defaults: HistoricalDefaults::default(),
        }
    }

    /// Backend host.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.cfg.host = host.into();
        self
    }

    /// Backend port.
    #[must_use]
    pub const fn port(mut self, port: u16) -> Self {
        self.cfg.port = port;
        self
    }

    /// Service opened after the session starts.
    #[must_use]
    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.cfg.service = service.into();
        self
    }

    /// Replace the whole session configuration.
    #[must_use]
    pub fn config(mut self, cfg: SessionConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Parameters applied to every historical request.
    ///
    /// Behavior and trade-offs:
    /// - Caller options passed to `historical_lookup` still win over these.
    /// - Changing `adjustment_split` alters every price series the service returns.
    #[must_use]
    pub const fn historical_defaults(mut self, defaults: HistoricalDefaults) -> Self {
        self.historical_defaults = defaults;
        self
    }

    /// Build a disconnected service.
    #[must_use]
    pub fn build(self) -> BlpService<T> {
        BlpService {
            transport: self.transport,
            cfg: self.cfg,
            historical_defaults: self.historical_defaults,
            connected: false,
        }
    }

    /// Build the service and connect it.
    ///
    /// # Errors
    /// Returns `Connection` if the session cannot be started.
    pub fn connect(self) -> Result<BlpService<T>, BlpError> {
        let mut svc = self.build();
        svc.connect()?;
        Ok(svc)
    }
}

impl<T: Transport> BlpService<T> {
    /// Start building a service around `transport`.
    ///
    /// ```rust,ignore
    /// use blp::{BlpService, Options};
    /// use blp_mock::MockTransport;
    ///
    /// let mut svc = BlpService::builder(MockTransport::new())
    ///     .host("localhost")
    ///     .port(8194)
    ///     .connect()?;
    /// let table = svc.point_lookup("IBM US Equity", "PX_LAST", &Options::new())?;
    /// ```
    #[must_use]
    pub fn builder(transport: T) -> BlpServiceBuilder<T> {
        BlpServiceBuilder::new(transport)
    }

    /// Session configuration in use.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.cfg
    }

    /// Defaults applied to historical requests.
    #[must_use]
    pub const fn historical_defaults(&self) -> &HistoricalDefaults {
        &self.historical_defaults
    }

    /// Underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Whether the session is connected.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// Start the session and open the configured service. No-op when already
    /// connected.
    ///
    /// # Errors
    /// Returns `Connection` if either step fails; the service stays
    /// disconnected and a half-started session is stopped.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "blp::session",
            skip(self),
            fields(host = %self.cfg.host, port = self.cfg.port),
        )
    )]
    pub fn connect(&mut self) -> Result<(), BlpError> {
        if self.connected {
            return Ok(());
        }
        if let Err(e) = self.transport.start(&self.cfg) {
            return Err(self.connection_error(e));
        }
        if let Err(e) = self.transport.open_service(&self.cfg.service) {
            self.transport.stop();
            return Err(self.connection_error(e));
        }
        self.connected = true;
        #[cfg(feature = "tracing")]
        tracing::info!(target: "blp::session", service = %self.cfg.service, "connected");
        Ok(())
    }

    /// Stop the session. No-op when not connected.
    pub fn disconnect(&mut self) {
        if !self.connected {
            return;
        }
        self.transport.stop();
        self.connected = false;
        #[cfg(feature = "tracing")]
        tracing::info!(target: "blp::session", "disconnected");
    }

    fn connection_error(&self, e: BlpError) -> BlpError {
        match e {
            e @ BlpError::Connection { .. } => e,
            other => BlpError::connection(&self.cfg.host, self.cfg.port, other.to_string()),
        }
    }

    /// Send `request` and collect its response messages.
    pub(crate) fn execute(&mut self, request: &Request) -> Result<Vec<T::Message>, BlpError> {
        if !self.connected {
            return Err(BlpError::NotConnected);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "blp::request",
            operation = request.kind().request_name(),
            securities = request.securities().len(),
            fields = request.fields().len(),
            "sending request"
        );
        self.transport.send_request(request)?;
        collect(&mut self.transport, request.kind())
    }
}

impl<T: Transport> Drop for BlpService<T> {
    fn drop(&mut self) {
        self.disconnect();
    }
}
