//! MOE SDK 安装描述模型库（跨平台/业务无关）。
//!
//! 功能：
//! - 定义已安装 SDK 的路径描述记录（sdk-properties.json）
//! - 提供 JSON 编码/解码辅助，便于跨进程/跨任务传递
//!
//! 作者：MOE SDK 集成项目组（自动生成）
//! 创建时间：2026-08-30
//! 修改时间：2026-08-30

pub mod sdk;
