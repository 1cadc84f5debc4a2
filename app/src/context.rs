use leptos::prelude::LeptosOptions;
use std::sync::Arc;

use crate::content::Content;
use crate::mailer::ContactMailer;

/// Everything the server hands to routes and server functions: the Leptos
/// options, the content loaded at startup, and the contact mailer.
#[derive(Clone, Debug)]
pub struct Context {
    pub leptos_options: LeptosOptions,
    pub content: Arc<Content>,
    pub mailer: ContactMailer,
}

// Looks like we could use `derive(FromRef)` on `Context` if we enabled the macros feature on axum.
impl axum::extract::FromRef<Context> for LeptosOptions {
    fn from_ref(value: &Context) -> Self {
        value.leptos_options.clone()
    }
}
