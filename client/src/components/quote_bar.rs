use leptos::prelude::*;

use crate::util::quotes::{current_day, quote_for_day};

/// Footer bar with the quote of the day.
#[component]
pub fn QuoteBar() -> impl IntoView {
    let quote = quote_for_day(current_day());
    view! {
        <footer class="quote-bar">
            <p class="quote-bar__text">{quote}</p>
        </footer>
    }
}
