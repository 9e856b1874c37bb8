use crate::domain::model::AppIdea;

/// 內建備援清單，任何抓取失敗時回傳。每次呼叫都建立新的 Vec。
pub fn fallback_ideas() -> Vec<AppIdea> {
    vec![
        AppIdea::new(
            "Order Printer Pro",
            "$10 - $40/mo",
            "Automatically generate and email PDF invoices, receipts, packing slips, and return forms.",
            "Operations & Finance",
            "Essential utility for compliance and professional branding that native Shopify lacks.",
        ),
        AppIdea::new(
            "Recharge Subscriptions",
            "$499/mo (Enterprise)",
            "The leading subscription management solution for Shopify stores.",
            "Subscriptions",
            "Handles complex recurring billing logic that Shopify doesn't do natively.",
        ),
        AppIdea::new(
            "Gorgias - Help Desk",
            "$60 - $360/mo",
            "Customer service helpdesk built specifically for Ecommerce.",
            "Customer Support",
            "Deep integration with Shopify data allowing instant order modification.",
        ),
        AppIdea::new(
            "Yotpo",
            "Custom Pricing (High Tier)",
            "Reviews, loyalty, and referrals platform.",
            "Marketing",
            "Creates a complete ecosystem for social proof and retention.",
        ),
        AppIdea::new(
            "Klaviyo",
            "$45 - $2000+/mo",
            "Email and SMS marketing automation heavily integrated with Shopify data.",
            "Marketing Automation",
            "Proven ROI tracking and extremely granular segmentation capabilities.",
        ),
        AppIdea::new(
            "Triple Whale",
            "$129 - $279+/mo",
            "All-in-one analytics and attribution dashboard for modern brands.",
            "Analytics",
            "Solves the data accuracy problem caused by iOS privacy updates.",
        ),
    ]
}
