use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::modal::ModalService;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Centralized modal and toast management
    provide_context(ModalService::new());
    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
            <ToastHost />
        </AuthProvider>
    }
}
