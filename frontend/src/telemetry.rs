//! 日志输出
//!
//! `tracing` 事件经 fmt 层格式化后写入浏览器控制台，按级别选择
//! `console.error` / `console.warn` / `console.log`。
//! 非 wasm 目标输出到 `stderr`。

use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(msg: &str);

    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(msg: &str);

    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(msg: &str);
}

fn emit(level: Level, line: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        match level {
            Level::ERROR => console_error(line),
            Level::WARN => console_warn(line),
            _ => console_log(line),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = level;
        eprint!("{}", line);
    }
}

/// 缓冲一条事件，drop 时整行输出
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        emit(self.level, line.trim_end());
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buf: Vec::new(),
        }
    }
}

/// 安装全局订阅者；重复调用时保留第一次的配置
pub fn init_tracing(max_level: Level) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(ConsoleMakeWriter)
        .without_time()
        .with_ansi(false)
        .with_target(true);

    let installed = tracing_subscriber::registry()
        .with(LevelFilter::from_level(max_level))
        .with(fmt_layer)
        .try_init();

    if installed.is_ok() {
        tracing::info!(level = %max_level, "tracing initialized");
    }
}
