use crate::layout::RootLayout;
use crate::usecases::u001_generate_form::GenerateFormPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <RootLayout>
            <GenerateFormPage />
        </RootLayout>
    }
}
