use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::api::{self, Endpoint};
use crate::email::{EmailRequest, EMAILJS_SEND_URL};
use crate::error::{ContactError, LoadError};
use crate::model::{ContactFields, PortfolioItem, SkillGroup, Testimonial};

fn js_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}

/// Issues a request; the returned future resolves to the `Response`.
fn send(url: &str, method: &str, json_body: Option<&str>) -> Result<JsFuture, JsValue> {
    let win = web_sys::window().ok_or("no window")?;
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = json_body {
        opts.set_body(&JsValue::from_str(body));
    }
    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;
    Ok(JsFuture::from(win.fetch_with_request(&request)))
}

/// Waits for a response and reads its status and text body.
async fn finish(pending: JsFuture) -> Result<(u16, String), JsValue> {
    let response: Response = pending.await?.dyn_into()?;
    let status = response.status();
    let body = JsFuture::from(response.text()?).await?;
    Ok((status, body.as_string().unwrap_or_default()))
}

async fn read(pending: Result<JsFuture, JsValue>) -> Result<String, LoadError> {
    let pending = pending.map_err(|e| LoadError::Network(js_message(&e)))?;
    let (status, body) = finish(pending)
        .await
        .map_err(|e| LoadError::Network(js_message(&e)))?;
    api::check_status(status, body)
}

/// Client for the site's JSON API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn get(&self, endpoint: Endpoint) -> Result<JsFuture, JsValue> {
        send(&endpoint.url(&self.base), "GET", None)
    }

    pub async fn fetch_portfolio(&self) -> Result<Vec<PortfolioItem>, LoadError> {
        api::decode_portfolio(&read(self.get(Endpoint::Portfolio)).await?)
    }

    pub async fn fetch_skills(&self) -> Result<Vec<SkillGroup>, LoadError> {
        api::decode_skills(&read(self.get(Endpoint::Skills)).await?)
    }

    pub async fn fetch_testimonials(&self) -> Result<Vec<Testimonial>, LoadError> {
        api::decode_testimonials(&read(self.get(Endpoint::Testimonials)).await?)
    }

    /// Posts the form to the site's own backend. Returns the decoded reply.
    pub async fn send_contact(&self, fields: &ContactFields) -> Result<serde_json::Value, LoadError> {
        let body = serde_json::to_string(fields).map_err(|e| LoadError::Decode(e.to_string()))?;
        let url = Endpoint::Contact.url(&self.base);
        api::decode(&read(send(&url, "POST", Some(&body))).await?)
    }

    /// Both startup reads, issued together. Either failure fails the pair.
    pub async fn fetch_content(&self) -> Result<(Vec<PortfolioItem>, Vec<SkillGroup>), LoadError> {
        let portfolio = self.get(Endpoint::Portfolio);
        let skills = self.get(Endpoint::Skills);
        let portfolio = read(portfolio).await.and_then(|b| api::decode_portfolio(&b));
        let skills = read(skills).await.and_then(|b| api::decode_skills(&b));
        api::combine(portfolio, skills)
    }
}

/// Delivers a contact message through EmailJS.
pub async fn send_email(request: &EmailRequest) -> Result<(), ContactError> {
    let body = request
        .to_json()
        .map_err(|e| ContactError::delivery(Some(&e.to_string())))?;
    let pending = send(EMAILJS_SEND_URL, "POST", Some(&body))
        .map_err(|e| ContactError::delivery(Some(&js_message(&e))))?;
    match finish(pending).await {
        Ok((status, _)) if (200..300).contains(&status) => Ok(()),
        Ok((status, text)) => {
            log::warn!("EmailJS rejected message with status {status}");
            Err(ContactError::delivery(Some(&text)))
        }
        Err(err) => Err(ContactError::delivery(Some(&js_message(&err)))),
    }
}
