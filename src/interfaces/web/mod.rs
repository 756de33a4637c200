use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};

use crate::domain::services::i18n_service::Translator;
use crate::infrastructure::services::document_attributes::RootDocumentAttributes;

/// What the page shell needs to render its root element
#[derive(Clone)]
pub struct WebState {
    pub translator: Arc<dyn Translator>,
    pub document: Arc<RootDocumentAttributes>,
}

/// Creates web routes serving the page shell
pub fn create_web_routes(translator: Arc<dyn Translator>, document: Arc<RootDocumentAttributes>) -> Router {
    Router::new()
        .route("/", get(render_shell))
        .with_state(WebState { translator, document })
}

async fn render_shell(State(state): State<WebState>) -> Html<String> {
    let attributes = state.document.snapshot();
    let title = escape_html(&state.translator.translate("app.title", None));
    let tagline = escape_html(&state.translator.translate("app.tagline", None));

    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\" dir=\"{dir}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n<p>{tagline}</p>\n</body>\n</html>\n",
        lang = escape_html(&attributes.lang),
        dir = attributes.dir,
        title = title,
        tagline = tagline,
    ))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::application::ports::i18n_ports::DocumentAttributesPort;
    use crate::application::services::i18n_service::I18nService;
    use crate::domain::entities::locale::Locale;
    use crate::infrastructure::services::bundled_translation_source::BundledTranslationSource;

    async fn render(router: Router) -> String {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_shell_follows_locale() {
        let document = Arc::new(RootDocumentAttributes::new());
        let port: Arc<dyn DocumentAttributesPort> = document.clone();
        let service = Arc::new(I18nService::new(BundledTranslationSource::store(), None).with_document(port));
        let router = create_web_routes(service.clone(), document);

        let page = render(router.clone()).await;
        assert!(page.contains("<html lang=\"en\" dir=\"ltr\">"));
        assert!(page.contains("Find food assistance near you"));

        service.set_locale(Locale::Arabic);
        let page = render(router).await;
        assert!(page.contains("<html lang=\"ar\" dir=\"rtl\">"));
        assert!(page.contains("ابحث عن المساعدة الغذائية بالقرب منك"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>\"Tom & Jerry's\"</b>"), "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;");
    }
}
