/**
 * Email Service
 *
 * Sends the purchase-summary email over SMTP via lettre's async transport.
 * One outbound call per invocation; a transport failure surfaces as the
 * call's error and is not retried.
 */

use lettre::{
    message::{header::ContentType, SinglePart},
    transport::smtp::{authentication::Credentials, Error as SmtpError},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;

use crate::server::config::EmailConfig;

/// Display name used in the From header
const SENDER_NAME: &str = "Ecommerce";

/// Subject of the purchase-summary email
const PURCHASE_SUBJECT: &str = "Resumen de compra";

/// Errors that can occur when sending email
#[derive(Debug, Error)]
pub enum EmailError {
    /// SMTP transport error
    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),

    /// Failed to build the email message
    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    /// Invalid email address
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
}

/// SMTP mailer for transactional email
#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl Mailer {
    /// Build the mailer from configuration
    ///
    /// The transport is constructed once at startup; no connection is
    /// opened until the first send.
    ///
    /// # Errors
    ///
    /// Returns an error if the relay host is not a valid SMTP endpoint.
    pub fn from_config(config: &EmailConfig) -> Result<Self, SmtpError> {
        let credentials =
            Credentials::new(config.username.clone(), config.password.clone());

        let transport =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(credentials)
                .build();

        Ok(Self {
            transport,
            from_address: config.from_address.clone(),
        })
    }

    /// Send the purchase-summary email
    ///
    /// # Arguments
    ///
    /// * `to` - Buyer's address
    /// * `in_stock` - Display names of the purchased products
    /// * `out_of_stock` - Display names of the products left out for lack
    ///   of stock
    /// * `total` - Purchase total
    /// * `code` - Purchase confirmation code
    ///
    /// # Errors
    ///
    /// Transport failures propagate to the caller; the send is
    /// all-or-nothing and never retried here.
    pub async fn send_purchase_summary(
        &self,
        to: &str,
        in_stock: &[String],
        out_of_stock: &[String],
        total: f64,
        code: &str,
    ) -> Result<(), EmailError> {
        let html = purchase_summary_html(in_stock, out_of_stock, total, code);

        let message = Message::builder()
            .from(
                format!("{SENDER_NAME} <{}>", self.from_address)
                    .parse()
                    .map_err(|_| EmailError::InvalidAddress(self.from_address.clone()))?,
            )
            .to(to
                .parse()
                .map_err(|_| EmailError::InvalidAddress(to.to_string()))?)
            .subject(PURCHASE_SUBJECT)
            .singlepart(
                SinglePart::builder()
                    .header(ContentType::TEXT_HTML)
                    .body(html),
            )?;

        self.transport.send(message).await?;

        tracing::info!(to = %to, code = %code, "Purchase summary email sent");
        Ok(())
    }
}

/// Render the purchase-summary HTML body
///
/// Kept as a pure function so the template can be tested without a
/// transport.
pub fn purchase_summary_html(
    in_stock: &[String],
    out_of_stock: &[String],
    total: f64,
    code: &str,
) -> String {
    let bought: String = in_stock
        .iter()
        .map(|product| format!("<li>{product}</li>"))
        .collect();
    let missing: String = out_of_stock
        .iter()
        .map(|product| format!("<li>{product}</li>"))
        .collect();

    format!(
        "<section>\
         <h1>Compra realizada con éxito</h1>\
         <h3>Le acercamos el resumen de la compra realizada en Ecommerce</h3>\
         <p>Productos comprados:</p>\
         <ul>{bought}</ul>\
         <p>Productos sin stock:</p>\
         <ul>{missing}</ul>\
         <p>El total de la compra es de ${total}</p>\
         <p>Gracias por su compra</p>\
         <p>Ecommerce</p>\
         <p>Código de compra: {code}</p>\
         </section>"
    )
}
