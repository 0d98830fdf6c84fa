use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::models::Podcast;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const DATASTAR_CDN: &str =
    "https://cdn.jsdelivr.net/gh/starfederation/datastar@1.0.0-RC.6/bundles/datastar.js";

pub const SUGGESTIONS: [&str; 3] = ["Formula 1", "Technology", "Football"];
pub const SEARCH_FAILED: &str = "Failed to search podcasts. Please try again.";

pub fn index_page() -> String {
    page(
        "Podcast Search",
        html! {
            (search_form(None))
            div id="content" class="mt-6" {
                (card(html! {
                    div class="text-center" {
                        h3 class="text-lg font-semibold text-gray-900" { "Search for podcasts" }
                        p class="mt-2 text-gray-600" { "Enter a search term above to find podcasts" }
                        div class="mt-4 flex justify-center gap-2" {
                            @for suggestion in SUGGESTIONS {
                                a class="rounded-full border border-gray-300 px-3 py-1 text-xs font-medium text-gray-700 hover:bg-gray-100" href=(search_url(suggestion)) {
                                    (suggestion)
                                }
                            }
                        }
                    }
                }))
            }
        },
    )
}

pub fn search_page(term: &str) -> String {
    let url = format!("/podcasts/results?term={}", urlencoding::encode(term));

    page(
        &format!("{term} · Podcast Search"),
        html! {
            (search_form(Some(term)))
            div id="content" class="mt-6" data-init=(PreEscaped(format!("@get('{}')", url))) {
                (card(html! {
                    div class="flex items-center justify-center gap-3" {
                        div class="h-5 w-5 rounded-full border-2 border-blue-200 border-t-blue-600 animate-spin" {}
                        p class="text-gray-600" { "Searching podcasts..." }
                    }
                }))
            }
        },
    )
}

/// Results grid, or the no-results card when nothing was saved.
pub fn results_fragment(term: &str, podcasts: &[Podcast]) -> String {
    content_div(html! {
        @if podcasts.is_empty() {
            (card(html! {
                div class="text-center" {
                    h3 class="font-semibold text-gray-900" { "No results found" }
                    p class="mt-2 text-gray-600" { "Try different keywords or check your spelling" }
                }
            }))
        } @else {
            (card(html! {
                div class="flex items-center justify-between" {
                    div {
                        h2 class="font-semibold text-gray-900" { "Search Results" }
                        p class="text-sm text-gray-600" {
                            "Found " (podcasts.len()) " podcasts for \"" (term) "\""
                        }
                    }
                    span class="rounded-full bg-gray-100 px-3 py-1 text-xs font-medium text-gray-700" {
                        (podcasts.len()) " results"
                    }
                }
            }))
            div class="mt-6 grid gap-6 md:grid-cols-2" {
                @for podcast in podcasts {
                    (podcast_card(podcast))
                }
            }
        }
    })
}

pub fn error_fragment() -> String {
    content_div(card(html! {
        div class="flex items-center gap-3 text-red-600" {
            span class="font-bold" { "!" }
            p { (SEARCH_FAILED) }
        }
    }))
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
                script type="module" src=(DATASTAR_CDN) {}
            }
            body class="min-h-screen bg-gray-50" {
                div class="max-w-3xl mx-auto px-6 py-8" {
                    div class="text-center mb-6" {
                        h1 class="text-3xl font-bold tracking-tight text-gray-900" {
                            a href="/" { "Podcast Search" }
                        }
                        p class="mt-2 text-gray-600" { "Discover podcasts from the iTunes Store" }
                    }
                    (body)
                }
            }
        }
    }
    .into_string()
}

fn content_div(inner: Markup) -> String {
    html! { div id="content" class="mt-6" { (inner) } }.into_string()
}

fn card(inner: Markup) -> Markup {
    html! { div class="bg-white shadow rounded-lg p-6" { (inner) } }
}

fn search_form(term: Option<&str>) -> Markup {
    card(html! {
        h2 class="text-lg font-semibold text-gray-900" { "Search Podcasts" }
        form class="mt-4 flex gap-3" method="get" action="/podcasts" {
            input class="flex-1 rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500"
                type="text" name="term" value=[term] required
                placeholder="Search for podcasts... (try 'joe rogan' or 'technology')";
            button class="rounded-md bg-blue-600 px-8 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Search" }
        }
    })
}

fn podcast_card(podcast: &Podcast) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6 h-full hover:shadow-md transition-shadow" {
            div class="flex gap-4" {
                @if let Some(artwork) = &podcast.artwork_url100 {
                    img class="h-16 w-16 flex-shrink-0 rounded-lg" src=(artwork) alt=(podcast.track_name) width="64" height="64";
                } @else {
                    div class="h-16 w-16 flex-shrink-0 rounded-lg bg-gray-100 flex items-center justify-center text-gray-400" { "♪" }
                }
                div class="min-w-0 flex-1" {
                    h3 class="font-semibold leading-tight text-gray-900 line-clamp-2" { (podcast.track_name) }
                    p class="mt-1 text-sm text-gray-600" { (podcast.artist_name) }
                }
            }

            div class="mt-4 flex items-center gap-2 text-xs text-gray-500" {
                @if let Some(genre) = &podcast.primary_genre_name {
                    span class="rounded-full bg-gray-100 px-2 py-0.5 font-medium text-gray-700" { (genre) }
                }
                span { (format_date(podcast)) }
            }

            @if let Some(link) = &podcast.track_view_url {
                a class="mt-4 block w-full rounded-md border border-gray-300 px-3 py-2 text-center text-sm text-gray-700 hover:bg-gray-50" href=(link) target="_blank" rel="noopener noreferrer" {
                    "View in iTunes"
                }
            }
        }
    }
}

fn search_url(term: &str) -> String {
    format!("/podcasts?term={}", urlencoding::encode(term))
}

fn format_date(podcast: &Podcast) -> String {
    podcast.created_at.strftime("%b %-d, %Y").to_string()
}
