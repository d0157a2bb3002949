//! HTTP 传输层
//!
//! 使用 `web_sys::fetch` 实现核心包的 [`HttpClient`]。fetch 只在网络层失败时
//! reject，此时返回 [`TransportError::NoResponse`]，由核心包决定是否重试；
//! 拿到响应后的失败一律是 [`TransportError::UnreadableBody`]。

use async_trait::async_trait;
use vendor_console::request::{HttpClient, HttpRequest, HttpResponse, TransportError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

fn js_error(context: &str, e: JsValue) -> TransportError {
    TransportError::NoResponse(format!("{}: {:?}", context, e))
}

fn body_error(status: Option<u16>, e: JsValue) -> TransportError {
    TransportError::UnreadableBody {
        status,
        message: format!("读取响应失败: {:?}", e),
    }
}

/// 基于浏览器 fetch 的客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

#[async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let headers = Headers::new().map_err(|e| js_error("创建 Headers 失败", e))?;
        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| js_error("设置 Header 失败", e))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());

        // multipart 以字节形式发送，boundary 已写入 Content-Type
        if let Some((content_type, bytes)) = req.body.encode() {
            headers
                .set("Content-Type", &content_type)
                .map_err(|e| js_error("设置 Content-Type 失败", e))?;
            let body = js_sys::Uint8Array::from(bytes.as_slice());
            opts.set_body(&body.into());
        }
        opts.set_headers(&headers.into());

        let request = Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| js_error("请求构建失败", e))?;

        let window = web_sys::window()
            .ok_or_else(|| TransportError::NoResponse("无法获取 window 对象".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| js_error("网络错误", e))?;

        let response: Response = resp_value.dyn_into().map_err(|e| body_error(None, e))?;
        let status = response.status();

        let text_promise = response.text().map_err(|e| body_error(Some(status), e))?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(|e| body_error(Some(status), e))?;

        Ok(HttpResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}
