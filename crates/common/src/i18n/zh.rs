//! Chinese copy (primary language).

use super::*;

pub static TRANSLATIONS: Translations = Translations {
    common: CommonText {
        download: "下载",
        learn_more: "了解更多",
        features: "功能",
        docs: "文档",
        home: "首页",
        all_platforms: "所有平台",
        loading: "加载中...",
        go_to_download_page: "前往下载页面",
        new_version_released: "新版本已发布",
        detected_system: "检测到你的系统",
        system_requirements: "系统要求",
        other_deployments: "其他部署方式",
        view_docs: "查看文档",
        menu: "菜单",
        released_on: "发布于",
        switch_language: "Switch to English",
    },
    hero: HeroText {
        tagline: &[
            "AI 对话的未来形态",
            "你的超级智能助手",
            "多模型，无限可能",
            "让创意自由流动",
        ],
        description: "一款跨平台的 AI 对话助手，支持 GPT-5、Claude、Gemini 等多种模型，通过 MCP 协议连接无限工具，让 AI 成为你的超级助手。",
        platform_support: "支持 macOS · Windows · Linux · Web · Docker",
    },
    highlights: HighlightsText {
        fast_response: "极速响应",
        secure: "安全可控",
        cross_platform: "全平台支持",
        mcp_extension: "MCP 扩展",
    },
    features: FeaturesText {
        title: "强大功能",
        subtitle: "Mobaus Studio 提供丰富的功能，让 AI 成为你的超级助手",
        items: FeatureItems {
            multi_model: FeatureText {
                title: "多模型支持",
                description: "支持 OpenAI GPT-5、Claude 4、Gemini 等主流 AI 模型，一键切换，灵活选择最适合的模型。",
                highlights: &["GPT-5 / GPT-4o", "Claude 4 Sonnet", "Gemini Pro", "自定义 API"],
            },
            mcp: FeatureText {
                title: "MCP 扩展协议",
                description: "通过 Model Context Protocol 连接外部工具和服务，让 AI 能够读写文件、查询数据库、操作 GitHub 等。",
                highlights: &["文件系统访问", "数据库查询", "GitHub 操作", "自定义工具"],
            },
            skills: FeatureText {
                title: "技能系统",
                description: "预设提示词模板，快速完成特定任务。支持自定义技能，打造专属工作流。",
                highlights: &["代码审查", "文档翻译", "内容创作", "自定义技能"],
            },
            agent: FeatureText {
                title: "智能体 (Agent)",
                description: "创建专属 AI 助手，配置特定的行为和能力。支持权限控制、上下文管理等高级功能。",
                highlights: &["自定义人设", "权限控制", "上下文管理", "MCP 工具绑定"],
            },
            chat: FeatureText {
                title: "对话管理",
                description: "支持多会话管理、历史记录、对话导出等功能。所有数据本地存储，保护隐私。",
                highlights: &["多会话切换", "历史记录", "对话导出", "本地存储"],
            },
            config: FeatureText {
                title: "灵活配置",
                description: "丰富的配置选项，包括模型参数、界面主题、快捷键等，打造个性化体验。",
                highlights: &["模型参数调节", "界面主题", "快捷键自定义", "代理设置"],
            },
            platform: FeatureText {
                title: "跨平台支持",
                description: "原生桌面应用支持 macOS、Windows、Linux，同时提供 Web 版本和 Docker 部署。",
                highlights: &["macOS 原生", "Windows 原生", "Linux 支持", "Web/Docker"],
            },
            update: FeatureText {
                title: "自动更新",
                description: "桌面应用内置自动更新功能，始终保持最新版本，第一时间体验新功能。",
                highlights: &["后台检查更新", "增量更新", "一键安装", "更新日志"],
            },
            security: FeatureText {
                title: "安全可控",
                description: "所有数据本地存储，API Key 加密保存。支持沙箱模式，确保操作安全。",
                highlights: &["本地数据存储", "API Key 加密", "沙箱模式", "权限控制"],
            },
            performance: FeatureText {
                title: "高性能",
                description: "基于 Tauri 构建，启动快速，内存占用低。流式响应，实时显示 AI 回复。",
                highlights: &["快速启动", "低内存占用", "流式响应", "原生性能"],
            },
            i18n: FeatureText {
                title: "国际化",
                description: "支持中文和英文界面，自动检测系统语言。文档完善，上手简单。",
                highlights: &["中文界面", "英文界面", "完善文档", "社区支持"],
            },
            open_source: FeatureText {
                title: "开源免费",
                description: "MIT 开源协议，完全免费使用。代码透明，欢迎贡献。",
                highlights: &["MIT 协议", "完全免费", "代码透明", "欢迎贡献"],
            },
        },
    },
    download: DownloadText {
        title: "下载 Mobaus Studio",
        subtitle: "选择适合你操作系统的版本，开始体验 AI 对话的未来形态",
        docker: DockerText {
            title: "Docker",
            description: "使用 Docker 一键部署，适合服务器环境",
        },
        web: WebBundleText {
            title: "Web 版本",
            description: "下载静态文件包，使用任意 HTTP 服务器托管",
            button: "下载 Web 版本",
        },
        requirements: RequirementsText {
            macos: "macOS 10.15 (Catalina) 或更高版本",
            windows: "Windows 10 (1803) 或更高版本",
            linux: "Linux: glibc 2.31+ (Ubuntu 20.04+)",
        },
    },
    chat: ChatText {
        ai_greeting: "你好！我是 Mobaus Studio，你的 AI 助手。有什么我可以帮助你的吗？",
        user_message: "帮我分析一下这个项目的代码结构",
        analyzing: "正在分析...",
    },
    footer: FooterText {
        quick_links: "快速链接",
        resources: "资源",
        changelog: "更新日志",
        feedback: "问题反馈",
        made_with: "Made with",
        description: "一款跨平台的 AI 对话助手，支持多种 AI 模型和 MCP 扩展。",
    },
    cta: CtaText {
        title: "准备好开始了吗？",
        description: "立即下载 Mobaus Studio，体验 AI 对话的未来形态。",
        sub_description: "完全免费，开源可自托管。",
        download_button: "免费下载",
        docs_button: "查看文档",
    },
    platforms: PlatformsText {
        title: "全平台支持",
        subtitle: "无论你使用什么设备，Mobaus Studio 都能完美运行",
        web: "浏览器直接访问",
        docker: "一键容器部署",
    },
    theme_switcher: ThemeSwitcherText {
        title: "选择主题风格",
        aria_label: "切换主题",
    },
    not_found: NotFoundText {
        title: "页面不存在",
        description: "你访问的页面已被移动或从未存在。",
        back_home: "返回首页",
    },
};
