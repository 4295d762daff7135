//! Avatar URL handed over by the server-rendered page

use crate::config::AppConfig;
use web_sys::Document;
use yew::prelude::*;

/// Avatar URL provided to every component; `None` when the host page
/// did not render the avatar element
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AvatarUrl(pub Option<String>);

impl AvatarUrl {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// Trim the raw element text. Whitespace-only text stays an empty string,
/// only a missing element yields `None`.
pub fn normalize_avatar_text(raw: Option<String>) -> Option<String> {
    raw.map(|text| text.trim().to_string())
}

/// Read the avatar URL from the host page
pub fn read_avatar_url(document: &Document) -> Option<String> {
    let text = document
        .get_element_by_id(AppConfig::AVATAR_ELEMENT_ID)
        .map(|element| element.text_content().unwrap_or_default());
    normalize_avatar_text(text)
}

#[derive(Properties, PartialEq)]
pub struct AvatarProviderProps {
    pub avatar_url: AvatarUrl,
    pub children: Children,
}

#[function_component(AvatarProvider)]
pub fn avatar_provider(props: &AvatarProviderProps) -> Html {
    html! {
        <ContextProvider<AvatarUrl> context={props.avatar_url.clone()}>
            {props.children.clone()}
        </ContextProvider<AvatarUrl>>
    }
}

/// Hook to read the injected avatar URL. Outside an `AvatarProvider` this
/// behaves like a page without the avatar element.
#[hook]
pub fn use_avatar_url() -> AvatarUrl {
    use_context::<AvatarUrl>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(
            normalize_avatar_text(Some("  https://x/a.png ".to_string())),
            Some("https://x/a.png".to_string())
        );
    }

    #[test]
    fn trims_newlines_from_template_rendering() {
        assert_eq!(
            normalize_avatar_text(Some("\n    /media/avatars/me.jpg\n".to_string())),
            Some("/media/avatars/me.jpg".to_string())
        );
    }

    #[test]
    fn missing_element_is_none() {
        assert_eq!(normalize_avatar_text(None), None);
    }

    #[test]
    fn empty_element_is_empty_string() {
        assert_eq!(normalize_avatar_text(Some("   ".to_string())), Some(String::new()));
    }
}
