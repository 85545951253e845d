use super::*;

pub static STRINGS: Strings = Strings {
    nav: NavCopy {
        home: "Home",
        services: "Services",
        market: "Market",
        blog: "Insights",
        contact: "Contact",
        switch: "中文",
        switch_aria: "切换到中文",
    },
    home: PageCopy {
        title: "{name} | Bay Area Real Estate Agent",
        description: "Buy or sell your Bay Area home with {name}. Local pricing insight, \
                      bilingual service in English and Chinese, and negotiation that protects your equity.",
        keywords: &[
            "real estate agent",
            "realtor",
            "homes for sale",
            "sell my house",
            "bilingual realtor",
        ],
        crumb: "Home",
    },
    blog: PageCopy {
        title: "Market Insights and Buyer Guides | {name}",
        description: "Practical guides for Bay Area buyers and sellers: financing, pricing, \
                      inspections and neighborhood trends from {name}.",
        keywords: &["home buying guide", "selling tips", "market trends", "mortgage"],
        crumb: "Insights",
    },
    not_found: PageCopy {
        title: "Page Not Found | {name}",
        description: "The page you are looking for does not exist.",
        keywords: &[],
        crumb: "Not found",
    },
    hero: HeroCopy {
        heading: "Find your next home with {name}",
        tagline: "Trusted guidance for buyers and sellers in {area}.",
        cta: "Book a free consultation",
        image_alt: "Sunlit living room of a renovated Victorian home",
    },
    services_heading: "How I can help",
    services: &[
        ServiceItem {
            title: "Buyer representation",
            body: "From pre-approval to keys in hand, I find off-market opportunities and negotiate on your side.",
        },
        ServiceItem {
            title: "Listing and marketing",
            body: "Professional staging, photography and targeted campaigns that bring qualified buyers.",
        },
        ServiceItem {
            title: "Pricing analysis",
            body: "A data-driven comparative market analysis so you list or offer at the right number.",
        },
        ServiceItem {
            title: "Relocation support",
            body: "Neighborhood tours, school research and trusted local vendors for families moving to the area.",
        },
    ],
    market: MarketCopy {
        heading: "Market snapshot",
        median_price: "Median sale price",
        days_on_market: "Median days on market",
        active_listings: "Active listings",
        year_over_year: "Year over year",
        note: "Figures are refreshed monthly from regional MLS data.",
    },
    listing: ListingCopy {
        heading: "Featured listing",
        price: "Offered at",
        cta: "Schedule a showing",
    },
    blog_heading: "Market insights",
    read_more: "Read more",
    posts: &[
        Post {
            id: "first-time-buyer-guide",
            date: "2024-03-12",
            title: "A first-time buyer's guide to the Bay Area",
            summary: "Budgeting, pre-approval and what to expect in a multiple-offer market.",
            body: &[
                "Start with a lender pre-approval. Sellers here rarely consider offers without one.",
                "Plan for inspections and disclosures before you write an offer, not after.",
                "Expect competition on well-priced homes and decide on your ceiling in advance.",
            ],
        },
        Post {
            id: "pricing-your-home",
            date: "2024-05-02",
            title: "How to price your home to sell",
            summary: "Why the first two weeks on market matter most, and how comparables guide the list price.",
            body: &[
                "Buyers watch new listings closely. A home priced right draws the most attention early.",
                "Recent comparable sales within half a mile are the strongest pricing signal.",
            ],
        },
        Post {
            id: "rates-and-affordability",
            date: "2024-08-20",
            title: "Mortgage rates and what they mean for you",
            summary: "A quick look at how a one-point rate change moves your monthly payment.",
            body: &[
                "On a one million dollar loan, a one-point change in rate moves the payment by roughly six hundred dollars.",
                "Rate buydowns and adjustable products can bridge the gap while rates settle.",
            ],
        },
    ],
    faq_heading: "Frequently asked questions",
    faq: &[
        FaqItem {
            question: "How much does it cost to work with a buyer's agent?",
            answer: "Compensation is agreed in writing before we tour homes, and is often paid from the seller's proceeds.",
        },
        FaqItem {
            question: "How long does it take to sell a home?",
            answer: "Well-prepared homes in this market typically go into contract within three weeks.",
        },
        FaqItem {
            question: "Do you work with international buyers?",
            answer: "Yes. I serve clients in English and Mandarin and coordinate with overseas lenders and attorneys.",
        },
    ],
    contact: ContactCopy {
        heading: "Get in touch",
        intro: "Tell me about your plans and I will reply within one business day.",
        name: "Your name",
        email: "Email",
        phone: "Phone",
        message: "How can I help?",
        submit: "Send message",
        call: "Call",
    },
    social: SocialCopy {
        follow: "Follow",
        share: "Share this page",
        email: "Email",
        wechat: "WeChat",
    },
    errors: ErrorCopy {
        network: "We couldn't load this section. Please check your connection.",
        generic: "Something went wrong while loading this section.",
        reload: "Reload page",
    },
    missing: NotFoundCopy {
        heading: "Page not found",
        body: "The page you requested has moved or no longer exists.",
        back: "Back to home",
    },
    footer: FooterCopy {
        rights: "All rights reserved.",
        license: "License",
    },
};
