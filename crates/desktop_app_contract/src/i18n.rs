//! Locale dictionary for shell chrome and built-in apps.
//!
//! Tables are plain `'static` structs so a missing key is a compile error rather than a runtime
//! lookup failure.
#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

/// Supported system languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// Simplified Chinese (`zh-CN`), the default.
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
    /// Traditional Chinese (`zh-TW`).
    #[serde(rename = "zh-TW")]
    ZhTw,
    /// English (`en`).
    #[serde(rename = "en")]
    En,
}

impl Locale {
    /// All locales in menu order.
    pub const ALL: [Locale; 3] = [Self::ZhCn, Self::ZhTw, Self::En];

    /// Returns the BCP-47 style language tag.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::ZhCn => "zh-CN",
            Self::ZhTw => "zh-TW",
            Self::En => "en",
        }
    }

    /// Returns the language name as shown in the language picker.
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::ZhCn => "简体中文",
            Self::ZhTw => "繁體中文",
            Self::En => "English",
        }
    }

    /// Parses a language tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.tag() == tag)
    }
}

/// Settings app tab labels.
#[derive(Debug)]
pub struct SettingsTabs {
    pub appearance: &'static str,
    pub components: &'static str,
    pub system: &'static str,
}

/// Settings app theme-mode section.
#[derive(Debug)]
pub struct SettingsTheme {
    pub title: &'static str,
    pub dark: &'static str,
    pub light: &'static str,
}

/// Settings app brand color section.
#[derive(Debug)]
pub struct SettingsBrand {
    pub title: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub desc_primary: &'static str,
    pub desc_secondary: &'static str,
}

/// Settings app typography section.
#[derive(Debug)]
pub struct SettingsTypography {
    pub title: &'static str,
    pub family: &'static str,
}

/// Settings app component styling section.
#[derive(Debug)]
pub struct SettingsComponents {
    pub title: &'static str,
    pub font_size: &'static str,
    pub radius: &'static str,
    pub shadow: &'static str,
    pub spacing: &'static str,
}

/// Settings app system section.
#[derive(Debug)]
pub struct SettingsSystem {
    pub language: &'static str,
    pub sys_language: &'static str,
    pub placeholder: &'static str,
}

/// Settings app strings.
#[derive(Debug)]
pub struct SettingsStrings {
    pub title: &'static str,
    pub tabs: SettingsTabs,
    pub theme: SettingsTheme,
    pub brand: SettingsBrand,
    pub typography: SettingsTypography,
    pub components: SettingsComponents,
    pub system: SettingsSystem,
    pub tip: &'static str,
}

/// Files app sidebar labels.
#[derive(Debug)]
pub struct FilesSidebar {
    pub favorites: &'static str,
    pub airdrop: &'static str,
    pub applications: &'static str,
    pub documents: &'static str,
}

/// Files app preview labels.
#[derive(Debug)]
pub struct FilesPreview {
    pub open: &'static str,
    pub created: &'static str,
    pub modified: &'static str,
    pub no_preview: &'static str,
}

/// Files app strings.
#[derive(Debug)]
pub struct FilesStrings {
    pub sidebar: FilesSidebar,
    pub all_files: &'static str,
    pub preview: FilesPreview,
}

/// Chat app strings.
#[derive(Debug)]
pub struct ChatStrings {
    pub search: &'static str,
    pub messages: &'static str,
    pub contacts: &'static str,
    pub type_message: &'static str,
    pub ai_assistant: &'static str,
    pub team: &'static str,
    pub online: &'static str,
    pub typing: &'static str,
    pub send: &'static str,
}

/// Window chrome control labels.
#[derive(Debug)]
pub struct WindowStrings {
    pub close: &'static str,
    pub minimize: &'static str,
    pub maximize: &'static str,
    pub restore: &'static str,
}

/// Localized app titles used at registration time.
#[derive(Debug)]
pub struct AppTitles {
    pub terminal: &'static str,
    pub safari: &'static str,
    pub calculator: &'static str,
    pub paint: &'static str,
    pub files: &'static str,
    pub chat: &'static str,
    pub settings: &'static str,
}

impl AppTitles {
    /// Looks up a title by its catalog key (`apps.<key>`).
    pub fn by_key(&self, key: &str) -> Option<&'static str> {
        match key {
            "terminal" => Some(self.terminal),
            "safari" => Some(self.safari),
            "calculator" => Some(self.calculator),
            "paint" => Some(self.paint),
            "files" => Some(self.files),
            "chat" => Some(self.chat),
            "settings" => Some(self.settings),
            _ => None,
        }
    }
}

/// Complete string table for one locale.
#[derive(Debug)]
pub struct Translations {
    pub settings: SettingsStrings,
    pub files: FilesStrings,
    pub chat: ChatStrings,
    pub window: WindowStrings,
    pub apps: AppTitles,
}

/// Returns the string table for `locale`.
pub fn translations(locale: Locale) -> &'static Translations {
    match locale {
        Locale::En => &EN,
        Locale::ZhCn => &ZH_CN,
        Locale::ZhTw => &ZH_TW,
    }
}

static EN: Translations = Translations {
    settings: SettingsStrings {
        title: "System Settings",
        tabs: SettingsTabs {
            appearance: "Appearance",
            components: "Components",
            system: "System",
        },
        theme: SettingsTheme {
            title: "Theme Mode",
            dark: "Dark Mode",
            light: "Light Mode",
        },
        brand: SettingsBrand {
            title: "Brand Colors",
            primary: "Primary Color",
            secondary: "Secondary Color",
            desc_primary: "Click to change system accent color",
            desc_secondary: "Click to change secondary interface color",
        },
        typography: SettingsTypography {
            title: "Typography",
            family: "Font Family",
        },
        components: SettingsComponents {
            title: "Component Styling",
            font_size: "Font Size",
            radius: "Border Radius",
            shadow: "Shadow Style",
            spacing: "Spacing",
        },
        system: SettingsSystem {
            language: "Language",
            sys_language: "System Language",
            placeholder: "Select Language",
        },
        tip: "Tip: Use HSL values for pixel-perfect themes. Changes apply instantly across the system.",
    },
    files: FilesStrings {
        sidebar: FilesSidebar {
            favorites: "Favorites",
            airdrop: "AirDrop",
            applications: "Applications",
            documents: "Documents",
        },
        all_files: "All Files",
        preview: FilesPreview {
            open: "Open File",
            created: "Created",
            modified: "Modified",
            no_preview: "No preview available for this file type.",
        },
    },
    chat: ChatStrings {
        search: "Global Search...",
        messages: "Messages",
        contacts: "Contacts",
        type_message: "Type a message...",
        ai_assistant: "AI Assistant",
        team: "Product Design Team",
        online: "Online",
        typing: "Typing...",
        send: "Send",
    },
    window: WindowStrings {
        close: "Close",
        minimize: "Minimize",
        maximize: "Maximize",
        restore: "Restore",
    },
    apps: AppTitles {
        terminal: "Terminal",
        safari: "Safari",
        calculator: "Calculator",
        paint: "Paint",
        files: "Files",
        chat: "Chat",
        settings: "System Settings",
    },
};

static ZH_CN: Translations = Translations {
    settings: SettingsStrings {
        title: "系统设置",
        tabs: SettingsTabs {
            appearance: "外观",
            components: "组件",
            system: "系统",
        },
        theme: SettingsTheme {
            title: "主题模式",
            dark: "深色模式",
            light: "浅色模式",
        },
        brand: SettingsBrand {
            title: "品牌色彩",
            primary: "主色调",
            secondary: "次色调",
            desc_primary: "点击更改系统强调色",
            desc_secondary: "点击更改次要界面颜色",
        },
        typography: SettingsTypography {
            title: "排版",
            family: "字体家族",
        },
        components: SettingsComponents {
            title: "组件样式",
            font_size: "字体大小",
            radius: "圆角半径",
            shadow: "阴影样式",
            spacing: "间距",
        },
        system: SettingsSystem {
            language: "语言",
            sys_language: "系统语言",
            placeholder: "选择语言",
        },
        tip: "提示：使用 HSL 值可以实现像素级完美的主题。更改会立即在整个系统中生效。",
    },
    files: FilesStrings {
        sidebar: FilesSidebar {
            favorites: "收藏夹",
            airdrop: "隔空投送",
            applications: "应用程序",
            documents: "文档",
        },
        all_files: "所有文件",
        preview: FilesPreview {
            open: "打开文件",
            created: "创建时间",
            modified: "修改时间",
            no_preview: "此文件类型暂无预览。",
        },
    },
    chat: ChatStrings {
        search: "企业全局搜索，搜你想搜...",
        messages: "消息",
        contacts: "通讯录",
        type_message: "输入消息...",
        ai_assistant: "AI 助手",
        team: "产品设计团队",
        online: "在线",
        typing: "正在输入...",
        send: "发送",
    },
    window: WindowStrings {
        close: "关闭",
        minimize: "最小化",
        maximize: "最大化",
        restore: "还原",
    },
    apps: AppTitles {
        terminal: "终端",
        safari: "浏览器",
        calculator: "计算器",
        paint: "画图",
        files: "文件管理",
        chat: "消息",
        settings: "系统设置",
    },
};

static ZH_TW: Translations = Translations {
    settings: SettingsStrings {
        title: "系統設置",
        tabs: SettingsTabs {
            appearance: "外觀",
            components: "組件",
            system: "系統",
        },
        theme: SettingsTheme {
            title: "主題模式",
            dark: "深色模式",
            light: "淺色模式",
        },
        brand: SettingsBrand {
            title: "品牌色彩",
            primary: "主色調",
            secondary: "次色調",
            desc_primary: "點擊更改系統強調色",
            desc_secondary: "點擊更改次要界面顏色",
        },
        typography: SettingsTypography {
            title: "排版",
            family: "字體家族",
        },
        components: SettingsComponents {
            title: "組件樣式",
            font_size: "字體大小",
            radius: "圓角半徑",
            shadow: "陰影樣式",
            spacing: "間距",
        },
        system: SettingsSystem {
            language: "語言",
            sys_language: "系統語言",
            placeholder: "選擇語言",
        },
        tip: "提示：使用 HSL 值可以實現像素級完美的主題。更改會立即在整個系統中生效。",
    },
    files: FilesStrings {
        sidebar: FilesSidebar {
            favorites: "收藏夾",
            airdrop: "隔空投送",
            applications: "應用程序",
            documents: "文檔",
        },
        all_files: "所有文件",
        preview: FilesPreview {
            open: "打開文件",
            created: "創建時間",
            modified: "修改時間",
            no_preview: "此文件類型暫無預覽。",
        },
    },
    chat: ChatStrings {
        search: "企業全局搜索，搜你想搜...",
        messages: "消息",
        contacts: "通訊錄",
        type_message: "輸入消息...",
        ai_assistant: "AI 助手",
        team: "產品設計團隊",
        online: "在線",
        typing: "正在輸入...",
        send: "發送",
    },
    window: WindowStrings {
        close: "關閉",
        minimize: "最小化",
        maximize: "最大化",
        restore: "還原",
    },
    apps: AppTitles {
        terminal: "終端",
        safari: "瀏覽器",
        calculator: "計算機",
        paint: "畫圖",
        files: "文件管理",
        chat: "消息",
        settings: "系統設置",
    },
};
