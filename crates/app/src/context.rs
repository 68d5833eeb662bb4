//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use crate::{
    clock::{Clock, SystemClock},
    config::StorefrontConfig,
    documents::{DocumentStore, HttpDocumentStore, HttpDocumentStoreConfig, LocalDocumentStore},
    domain::{
        access::AccessGuard,
        carts::CartService,
        checkout::{CheckoutService, CheckoutSettings},
        orders::{DocumentOrdersService, OrdersService},
        products::{DocumentProductsService, ProductsService},
    },
    identity::{IdentityProvider, StaticIdentityProvider},
    notifier::{EmailJsNotifier, Notifier},
    storage::{CART_KEY, CartStore, FileCartStore},
};

/// Services wired from configuration, built once at startup.
#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub orders: Arc<dyn OrdersService>,
    pub checkout: Arc<CheckoutService>,
    pub access: AccessGuard,
    pub identity: Arc<dyn IdentityProvider>,
    cart_store: Arc<dyn CartStore>,
}

impl AppContext {
    /// Build application context from configuration.
    #[must_use]
    pub fn from_config(config: &StorefrontConfig) -> Self {
        let documents: Arc<dyn DocumentStore> = match &config.store.document_store_url {
            Some(base_url) => Arc::new(HttpDocumentStore::new(HttpDocumentStoreConfig {
                base_url: base_url.clone(),
                api_key: config.store.document_store_api_key.clone(),
            })),
            None => Arc::new(LocalDocumentStore::new(config.store.local_documents_dir())),
        };

        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let identity: Arc<dyn IdentityProvider> = Arc::new(StaticIdentityProvider::from_session(
            config.session.user_id.clone(),
            config.session.user_email.clone(),
            config.session.user_name.clone(),
        ));

        let notifier = config
            .notifier
            .emailjs()
            .map(|emailjs| Arc::new(EmailJsNotifier::new(emailjs)) as Arc<dyn Notifier>);

        let orders: Arc<dyn OrdersService> = Arc::new(DocumentOrdersService::new(documents.clone()));

        let checkout = CheckoutService::new(
            orders.clone(),
            notifier,
            identity.clone(),
            clock.clone(),
            CheckoutSettings {
                delivery_charge: config.checkout.delivery_charge,
                order_timeout: config.store.order_timeout(),
                notify_timeout: config.notifier.notify_timeout(),
            },
        );

        Self {
            products: Arc::new(DocumentProductsService::new(documents, clock)),
            orders,
            checkout: Arc::new(checkout),
            access: AccessGuard::new(identity.clone(), config.access.policy()),
            identity,
            cart_store: Arc::new(FileCartStore::new(&config.store.cart_dir, CART_KEY)),
        }
    }

    /// Hydrate the session cart from its persisted slot.
    pub fn load_cart(&self) -> CartService {
        CartService::load(self.cart_store.clone())
    }
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext")
            .field("checkout", &self.checkout)
            .field("access", &self.access)
            .finish_non_exhaustive()
    }
}
