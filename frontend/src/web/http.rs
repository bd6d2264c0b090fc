//! HTTP 请求封装模块
//!
//! 基于 `gloo-net` 的 fetch 实现核心库的 `HttpClient`。

use backoffice::error::{AdminError, AdminResult};
use backoffice::request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use gloo_net::http::{Request, RequestBuilder};

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchClient;

impl FetchClient {
    fn builder(url: &str, method: HttpMethod) -> RequestBuilder {
        match method {
            HttpMethod::Get => Request::get(url),
            HttpMethod::Post => Request::post(url),
            HttpMethod::Patch => Request::patch(url),
            HttpMethod::Delete => Request::delete(url),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> AdminResult<HttpResponse> {
        let mut builder = Self::builder(&req.url, req.method);
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let response = match req.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| AdminError::transport(format!("请求构建失败: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| AdminError::transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AdminError::transport(format!("响应读取失败: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
