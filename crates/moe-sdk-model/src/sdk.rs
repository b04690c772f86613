//! SDK 安装描述（sdk-properties.json）模型定义。
//!
//! 该模块描述构建工具定位 SDK 产物所需的全部输入：
//! - SDK 安装根目录（home）
//! - 核心库归档（coreJar）
//! - 平台库归档（platformJar，可缺省）
//! - 测试框架库归档（junitJar）
//!
//! 约定：
//! - 该模块仅定义数据结构，不执行任何 IO/路径校验
//! - 字段值由外部的 SDK 发现逻辑提供，路径正确性由调用方负责
//! - JSON 字段名与模型同名（camelCase）；可选字段缺省时省略，输入为 `null` 亦视为缺省
//!
//! 作者：MOE SDK 集成项目组（自动生成）
//! 创建时间：2026-08-30
//! 修改时间：2026-08-30

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// SDK 安装描述记录（对应 `sdk-properties.json`）。
///
/// 字段说明：
/// - `home`：SDK 安装根目录（绝对路径字符串）
/// - `core_jar`：核心库归档路径
/// - `platform_jar`：平台库归档路径（无平台专用产物时为 `None`）
/// - `junit_jar`：测试框架库归档路径
///
/// 约束：
/// - 构造后不可变；相等性与哈希基于全部四个字段一并派生
/// - 本类型不做任何校验，任意字符串（包括指向不存在路径的）均原样保存
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SdkProperties {
    /// SDK 安装根目录（绝对路径字符串）。
    pub home: String,
    /// 核心库归档路径。
    pub core_jar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// 平台库归档路径（缺省表示无平台专用产物，序列化时省略该键）。
    pub platform_jar: Option<String>,
    /// 测试框架库归档路径。
    pub junit_jar: String,
}

impl SdkProperties {
    /// 创建一份新的 SDK 安装描述。
    ///
    /// 参数：
    /// - `home`：SDK 安装根目录
    /// - `core_jar`：核心库归档路径
    /// - `platform_jar`：平台库归档路径（可缺省）
    /// - `junit_jar`：测试框架库归档路径
    ///
    /// 返回值：
    /// - 初始化后的 [`SdkProperties`]；构造不会失败，也不做任何校验。
    pub fn new(
        home: String,
        core_jar: String,
        platform_jar: Option<String>,
        junit_jar: String,
    ) -> Self {
        Self {
            home,
            core_jar,
            platform_jar,
            junit_jar,
        }
    }

    /// 编码为 JSON 字符串（用于跨进程/跨任务传递或落盘）。
    ///
    /// 返回值：
    /// - 成功：JSON 文本；`platform_jar` 缺省时不含 `platformJar` 键
    ///
    /// 异常处理：
    /// - 序列化失败时返回错误。
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).context("序列化 SDK 描述失败")
    }

    /// 从 JSON 字符串解码。
    ///
    /// 参数：
    /// - `json`：JSON 文本（`platformJar` 省略或为 `null` 均视为缺省）
    ///
    /// 异常处理：
    /// - JSON 语法错误或缺少必填字段时返回错误。
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("解析 SDK 描述 JSON 失败")
    }
}
