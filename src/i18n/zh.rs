use super::*;

pub static STRINGS: Strings = Strings {
    nav: NavCopy {
        home: "首页",
        services: "服务",
        market: "市场",
        blog: "洞察",
        contact: "联系",
        switch: "English",
        switch_aria: "Switch to English",
    },
    home: PageCopy {
        title: "{name} | 湾区房产经纪人",
        description: "与{name}一起在湾区买房卖房。本地定价洞察，中英双语服务，专业谈判守护您的资产。",
        keywords: &["房产经纪人", "湾区买房", "卖房", "华人经纪", "房地产"],
        crumb: "首页",
    },
    blog: PageCopy {
        title: "市场洞察与购房指南 | {name}",
        description: "{name}为湾区买家和卖家整理的实用指南：贷款、定价、验房与社区趋势。",
        keywords: &["购房指南", "卖房技巧", "市场趋势", "房贷"],
        crumb: "洞察",
    },
    not_found: PageCopy {
        title: "页面未找到 | {name}",
        description: "您访问的页面不存在。",
        keywords: &[],
        crumb: "未找到",
    },
    hero: HeroCopy {
        heading: "与{name}一起找到理想的家",
        tagline: "为{area}的买家和卖家提供值得信赖的专业指导。",
        cta: "预约免费咨询",
        image_alt: "翻新维多利亚式住宅中阳光充足的客厅",
    },
    services_heading: "我的服务",
    services: &[
        ServiceItem {
            title: "买方代理",
            body: "从贷款预批到交房，为您寻找未公开房源并全程代表您谈判。",
        },
        ServiceItem {
            title: "房源推广",
            body: "专业布置、摄影与精准推广，吸引合格买家。",
        },
        ServiceItem {
            title: "定价分析",
            body: "基于数据的市场比较分析，帮助您以合理价格挂牌或出价。",
        },
        ServiceItem {
            title: "搬迁协助",
            body: "社区看房、学区调研以及可信赖的本地服务商推荐。",
        },
    ],
    market: MarketCopy {
        heading: "市场速览",
        median_price: "成交价中位数",
        days_on_market: "在售天数中位数",
        active_listings: "在售房源",
        year_over_year: "同比变化",
        note: "数据每月根据区域 MLS 更新。",
    },
    listing: ListingCopy {
        heading: "精选房源",
        price: "售价",
        cta: "预约看房",
    },
    blog_heading: "市场洞察",
    read_more: "阅读全文",
    posts: &[
        Post {
            id: "first-time-buyer-guide",
            date: "2024-03-12",
            title: "湾区首次购房指南",
            summary: "预算规划、贷款预批以及多方竞价市场中的注意事项。",
            body: &[
                "先取得贷款预批。这里的卖家很少考虑没有预批的报价。",
                "在出价之前就规划好验房和披露文件的审阅。",
                "价格合理的房子竞争激烈，请提前确定您的最高出价。",
            ],
        },
        Post {
            id: "pricing-your-home",
            date: "2024-05-02",
            title: "如何为您的房子合理定价",
            summary: "为什么上市前两周最关键，以及可比成交如何指导挂牌价。",
            body: &[
                "买家密切关注新上市房源，定价合理的房子在初期获得最多关注。",
                "半英里内近期的可比成交是最有力的定价依据。",
            ],
        },
        Post {
            id: "rates-and-affordability",
            date: "2024-08-20",
            title: "房贷利率对您意味着什么",
            summary: "利率变化一个百分点会如何影响您的月供。",
            body: &[
                "以一百万美元贷款为例，利率变化一个百分点，月供大约变化六百美元。",
                "在利率稳定之前，利率买断和可调利率产品可以帮助过渡。",
            ],
        },
    ],
    faq_heading: "常见问题",
    faq: &[
        FaqItem {
            question: "聘请买方经纪人需要多少费用？",
            answer: "佣金会在看房前以书面形式约定，通常由卖方所得款项支付。",
        },
        FaqItem {
            question: "卖房通常需要多长时间？",
            answer: "在当前市场，准备充分的房子通常在三周内签约。",
        },
        FaqItem {
            question: "您是否服务海外买家？",
            answer: "是的。我提供英语和普通话服务，并协调海外贷款机构与律师。",
        },
    ],
    contact: ContactCopy {
        heading: "联系我",
        intro: "告诉我您的计划，我会在一个工作日内回复。",
        name: "您的姓名",
        email: "电子邮箱",
        phone: "电话",
        message: "需要什么帮助？",
        submit: "发送信息",
        call: "致电",
    },
    social: SocialCopy {
        follow: "关注",
        share: "分享此页",
        email: "邮件",
        wechat: "微信",
    },
    errors: ErrorCopy {
        network: "此部分加载失败，请检查您的网络连接。",
        generic: "加载此部分时出现问题。",
        reload: "重新加载",
    },
    missing: NotFoundCopy {
        heading: "页面未找到",
        body: "您访问的页面已移动或不存在。",
        back: "返回首页",
    },
    footer: FooterCopy {
        rights: "版权所有。",
        license: "执照",
    },
};
