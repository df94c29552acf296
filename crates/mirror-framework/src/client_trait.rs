//! # MirrorAccess Trait
//!
//! Provides a common interface for document-specific handles, adding default read methods
//! built on top of a generic `MirrorClient`.
use crate::{FrameworkError, MirrorClient, MirrorEntity};
use async_trait::async_trait;

/// Trait for document-specific handles to inherit the standard mirror reads.
///
/// # Example
///
/// ```rust
/// use mirror_framework::{FrameworkError, MirrorAccess, MirrorClient, MirrorEntity};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Invoice { id: u32 }
/// #[derive(Debug)] struct InvoiceUpdate;
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct InvoiceError(String);
///
/// impl From<String> for InvoiceError {
///     fn from(s: String) -> Self { InvoiceError(s) }
/// }
///
/// impl MirrorEntity for Invoice {
///     type Id = u32;
///     type Update = InvoiceUpdate;
///     type Filter = ();
///     type Error = InvoiceError;
///     fn id(&self) -> &u32 { &self.id }
///     fn matches(&self, _: &()) -> bool { true }
///     fn apply(&mut self, _: InvoiceUpdate) -> Result<(), InvoiceError> { Ok(()) }
/// }
///
/// struct Invoices {
///     inner: MirrorClient<Invoice>,
/// }
///
/// #[async_trait]
/// impl MirrorAccess<Invoice> for Invoices {
///     type Error = InvoiceError;
///
///     fn inner(&self) -> &MirrorClient<Invoice> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         InvoiceError(e.to_string())
///     }
/// }
///
/// async fn usage(invoices: Invoices) {
///     // get() and snapshot() are provided automatically!
///     let _ = invoices.get(1).await;
///     let _ = invoices.snapshot().await;
/// }
/// ```
#[async_trait]
pub trait MirrorAccess<T: MirrorEntity>: Send + Sync {
    /// The document-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic MirrorClient.
    fn inner(&self) -> &MirrorClient<T>;

    /// Map framework errors to the document-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch one mirrored entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Every mirrored entity, ignoring the filter.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
