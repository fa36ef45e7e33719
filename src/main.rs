//! ssml-render - 将 SSML 脚本渲染为完整文档
//!
//! 读取配置中的脚本（.toml / .json），渲染后写入输出文件或 stdout

use std::sync::Arc;

use ssml_builder::application::{RenderScript, RenderScriptHandler};
use ssml_builder::config::{load_config, print_config};
use ssml_builder::infrastructure::FileScriptStorage;

fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志（输出到 stderr，stdout 留给文档）
    let log_filter = format!("{},ssml_builder={}", config.log.level, config.log.level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);
    if config.log.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    print_config(&config);

    let handler = RenderScriptHandler::new(Arc::new(FileScriptStorage::new()));
    let response = handler.handle(RenderScript {
        script_path: config.render.script.clone(),
        output_path: config.render.output.clone(),
    })?;

    if config.render.output.is_none() {
        println!("{}", response.ssml);
    }

    Ok(())
}
