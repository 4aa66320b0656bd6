//! Path parsing for the two page contexts.
//!
//! `""` and `"/"` land on the home page. `/project/<id>` addresses a case
//! study. Anything else is [`Route::NotFound`] and the app redirects home.

pub const HOME_PATH: &str = "/home";
const PROJECT_PREFIX: &str = "project";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Route<'a> {
    Home {
        fragment: Option<&'a str>,
    },
    /// `id` is empty when the path stops at `/project`.
    Project {
        id: &'a str,
        fragment: Option<&'a str>,
    },
    NotFound,
}

impl<'a> Route<'a> {
    pub fn fragment(&self) -> Option<&'a str> {
        match self {
            Self::Home { fragment } | Self::Project { fragment, .. } => *fragment,
            Self::NotFound => None,
        }
    }
}

pub fn parse_route(url: &str) -> Route<'_> {
    let (path, fragment) = match url.split_once('#') {
        Some((path, fragment)) => (path, Some(fragment).filter(|f| !f.is_empty())),
        None => (url, None),
    };
    let path = path.split_once('?').map_or(path, |(path, _)| path);
    let path = path.trim_matches('/');

    let mut segments = path.split('/');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(""), None, None) | (Some("home"), None, None) => Route::Home { fragment },
        (Some(PROJECT_PREFIX), id, None) => Route::Project {
            id: id.unwrap_or(""),
            fragment,
        },
        _ => Route::NotFound,
    }
}
