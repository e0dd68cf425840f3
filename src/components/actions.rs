//! Click/mount wiring between components and `SessionServices`.
//!
//! Each helper registers a `Liveness` token retired on cleanup, so
//! continuations that land after the component is gone are dropped.

use leptos::prelude::*;

use crate::session::SessionServices;
use crate::state::header::HeaderState;
use crate::util::liveness::Liveness;

/// Liveness token tied to the current reactive owner.
pub fn use_liveness() -> Liveness {
    let liveness = Liveness::new();
    let on_teardown = liveness.clone();
    on_cleanup(move || on_teardown.retire());
    liveness
}

/// Run the profile probe once, after the calling component mounts.
pub fn install_session_probe(services: SessionServices, header: RwSignal<HeaderState>) {
    let liveness = use_liveness();
    Effect::new(move || {
        let services = services.clone();
        let liveness = liveness.clone();
        leptos::task::spawn_local(async move {
            let result = services.probe_session(&liveness).await;
            if liveness.is_alive() {
                let _ = header.try_update(|h| h.apply_probe(&result));
            }
        });
    });
}

/// Callback that looks up the organization URL and navigates there.
pub fn org_redirect_callback(services: SessionServices, header: RwSignal<HeaderState>) -> Callback<()> {
    let liveness = use_liveness();
    Callback::new(move |()| {
        let services = services.clone();
        let liveness = liveness.clone();
        leptos::task::spawn_local(async move {
            let result = services.redirect_to_org(&liveness).await;
            if liveness.is_alive() {
                let _ = header.try_update(|h| h.apply_org_redirect(&result));
            }
        });
    })
}

/// Callback that signs the header out and leaves for the logout route.
pub fn logout_callback(services: SessionServices, header: RwSignal<HeaderState>) -> Callback<()> {
    Callback::new(move |()| {
        services.logout(|| {
            let _ = header.try_update(HeaderState::sign_out);
        });
    })
}
