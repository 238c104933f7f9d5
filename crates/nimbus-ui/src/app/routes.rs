//! Routing definitions for the Nimbus dashboard.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Dashboard,
    #[at("/forgot-password")]
    ForgotPassword,
    #[not_found]
    #[at("/404")]
    NotFound,
}
