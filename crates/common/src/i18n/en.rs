//! English copy (fallback language).

use super::*;

pub static TRANSLATIONS: Translations = Translations {
    common: CommonText {
        download: "Download",
        learn_more: "Learn More",
        features: "Features",
        docs: "Docs",
        home: "Home",
        all_platforms: "All Platforms",
        loading: "Loading...",
        go_to_download_page: "Go to Download Page",
        new_version_released: "New Version Released",
        detected_system: "Detected your system",
        system_requirements: "System Requirements",
        other_deployments: "Other Deployments",
        view_docs: "View Docs",
        menu: "Menu",
        released_on: "Released",
        switch_language: "切换到中文",
    },
    hero: HeroText {
        tagline: &[
            "The Future of AI Conversation",
            "Your Super Intelligent Assistant",
            "Multi-Model, Infinite Possibilities",
            "Let Creativity Flow Freely",
        ],
        description: "A cross-platform AI chat assistant supporting GPT-5, Claude, Gemini and more. Connect unlimited tools via MCP protocol, making AI your super assistant.",
        platform_support: "Supports macOS · Windows · Linux · Web · Docker",
    },
    highlights: HighlightsText {
        fast_response: "Fast Response",
        secure: "Secure & Safe",
        cross_platform: "Cross-Platform",
        mcp_extension: "MCP Extension",
    },
    features: FeaturesText {
        title: "Powerful Features",
        subtitle: "Mobaus Studio provides rich features to make AI your super assistant",
        items: FeatureItems {
            multi_model: FeatureText {
                title: "Multi-Model Support",
                description: "Support OpenAI GPT-5, Claude 4, Gemini and other mainstream AI models. Switch with one click, flexibly choose the most suitable model.",
                highlights: &["GPT-5 / GPT-4o", "Claude 4 Sonnet", "Gemini Pro", "Custom API"],
            },
            mcp: FeatureText {
                title: "MCP Extension Protocol",
                description: "Connect external tools and services through Model Context Protocol. Enable AI to read/write files, query databases, operate GitHub, etc.",
                highlights: &["File System Access", "Database Query", "GitHub Operations", "Custom Tools"],
            },
            skills: FeatureText {
                title: "Skills System",
                description: "Preset prompt templates for quick task completion. Support custom skills to build your own workflow.",
                highlights: &["Code Review", "Doc Translation", "Content Creation", "Custom Skills"],
            },
            agent: FeatureText {
                title: "Agent",
                description: "Create your own AI assistant with specific behaviors and capabilities. Support permission control, context management and more.",
                highlights: &["Custom Persona", "Permission Control", "Context Management", "MCP Tool Binding"],
            },
            chat: FeatureText {
                title: "Chat Management",
                description: "Support multi-session management, history records, conversation export. All data stored locally to protect privacy.",
                highlights: &["Multi-Session", "History Records", "Export Chats", "Local Storage"],
            },
            config: FeatureText {
                title: "Flexible Configuration",
                description: "Rich configuration options including model parameters, UI themes, shortcuts, etc. Create personalized experience.",
                highlights: &["Model Parameters", "UI Themes", "Custom Shortcuts", "Proxy Settings"],
            },
            platform: FeatureText {
                title: "Cross-Platform",
                description: "Native desktop apps for macOS, Windows, Linux. Also provides Web version and Docker deployment.",
                highlights: &["macOS Native", "Windows Native", "Linux Support", "Web/Docker"],
            },
            update: FeatureText {
                title: "Auto Update",
                description: "Built-in auto-update for desktop apps. Always stay up-to-date and experience new features first.",
                highlights: &["Background Check", "Incremental Update", "One-Click Install", "Changelog"],
            },
            security: FeatureText {
                title: "Secure & Safe",
                description: "All data stored locally, API Keys encrypted. Support sandbox mode to ensure safe operations.",
                highlights: &["Local Storage", "API Key Encryption", "Sandbox Mode", "Permission Control"],
            },
            performance: FeatureText {
                title: "High Performance",
                description: "Built with Tauri, fast startup, low memory usage. Streaming response, real-time AI replies.",
                highlights: &["Fast Startup", "Low Memory", "Streaming Response", "Native Performance"],
            },
            i18n: FeatureText {
                title: "Internationalization",
                description: "Support Chinese and English interface, auto-detect system language. Complete documentation, easy to get started.",
                highlights: &["Chinese UI", "English UI", "Complete Docs", "Community Support"],
            },
            open_source: FeatureText {
                title: "Open Source & Free",
                description: "MIT open source license, completely free to use. Transparent code, contributions welcome.",
                highlights: &["MIT License", "Completely Free", "Transparent Code", "Contributions Welcome"],
            },
        },
    },
    download: DownloadText {
        title: "Download Mobaus Studio",
        subtitle: "Choose the version for your operating system and start experiencing the future of AI conversation",
        docker: DockerText {
            title: "Docker",
            description: "One-click deployment with Docker, suitable for server environments",
        },
        web: WebBundleText {
            title: "Web Version",
            description: "Download static files and host with any HTTP server",
            button: "Download Web Version",
        },
        requirements: RequirementsText {
            macos: "macOS 10.15 (Catalina) or later",
            windows: "Windows 10 (1803) or later",
            linux: "Linux: glibc 2.31+ (Ubuntu 20.04+)",
        },
    },
    chat: ChatText {
        ai_greeting: "Hello! I'm Mobaus Studio, your AI assistant. How can I help you?",
        user_message: "Help me analyze the code structure of this project",
        analyzing: "Analyzing...",
    },
    footer: FooterText {
        quick_links: "Quick Links",
        resources: "Resources",
        changelog: "Changelog",
        feedback: "Feedback",
        made_with: "Made with",
        description: "A cross-platform AI chat assistant supporting multiple AI models and MCP extensions.",
    },
    cta: CtaText {
        title: "Ready to Get Started?",
        description: "Download Mobaus Studio now and experience the future of AI conversation.",
        sub_description: "Completely free, open source and self-hostable.",
        download_button: "Free Download",
        docs_button: "View Docs",
    },
    platforms: PlatformsText {
        title: "Cross-Platform Support",
        subtitle: "No matter what device you use, Mobaus Studio runs perfectly",
        web: "Access via Browser",
        docker: "One-Click Container Deploy",
    },
    theme_switcher: ThemeSwitcherText {
        title: "Select Theme Style",
        aria_label: "Toggle Theme",
    },
    not_found: NotFoundText {
        title: "Page Not Found",
        description: "The page you are looking for has moved or never existed.",
        back_home: "Back to Home",
    },
};
