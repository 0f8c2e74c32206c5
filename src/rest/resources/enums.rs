//! Enums shared across resources.
//!
//! These mirror the API's cross-resource enum fields. Resource-scoped
//! enums (a payment source's `Status`, a card's `Brand`) live with their
//! resource instead.
//!
//! All of them decode through [`WireEnum`](crate::wire::WireEnum), so a
//! token added on the server side after this release degrades to
//! `Unrecognized` rather than failing the response.

crate::wire_enum! {
    /// The kind of instrument behind a payment source.
    ///
    /// Arrives on the wire as the `type` field.
    pub enum PaymentSourceType {
        Card => "card",
        PaypalExpressCheckout => "paypal_express_checkout",
        AmazonPayments => "amazon_payments",
        DirectDebit => "direct_debit",
        Generic => "generic",
        Alipay => "alipay",
        Unionpay => "unionpay",
        ApplePay => "apple_pay",
        GooglePay => "google_pay",
        Ideal => "ideal",
        Sofort => "sofort",
        Bancontact => "bancontact",
    }
}

crate::wire_enum! {
    /// The gateway a payment source is stored with.
    ///
    /// `NotApplicable` covers sources that never touch a gateway.
    pub enum Gateway {
        Chargebee => "chargebee",
        Stripe => "stripe",
        Braintree => "braintree",
        Adyen => "adyen",
        AuthorizeNet => "authorize_net",
        PaypalPro => "paypal_pro",
        Worldpay => "worldpay",
        CheckoutCom => "checkout_com",
        Gocardless => "gocardless",
        NotApplicable => "not_applicable",
    }
}

crate::wire_enum! {
    /// Whether charges are collected automatically or invoiced offline.
    pub enum AutoCollection {
        On => "on",
        Off => "off",
    }
}
