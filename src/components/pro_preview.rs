use leptos::prelude::*;

use crate::catalog::ProProfile;

/// Portrait and blurb for the selected professional.
#[component]
pub fn ProPreview(profile: ProProfile) -> impl IntoView {
    view! {
        <div class="pro-preview">
            <img src=profile.image.clone() alt=profile.name.clone() class="pro-portrait" />
            <div class="pro-preview-info">
                <strong class="pro-name">{profile.name.clone()}</strong>
                <span class="pro-specialty">{profile.specialty.clone()}</span>
                <p class="pro-description">{profile.description.clone()}</p>
            </div>
        </div>
    }
}
