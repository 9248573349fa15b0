pub struct SmsTransport {
    pub url: &'static str,
    pub timeout_ms: u64,
}

pub struct VonageConfig {
    pub sms: SmsTransport,
}

pub const VONAGE: VonageConfig = VonageConfig {
    sms: SmsTransport {
        url: "https://rest.nexmo.com/sms/json",
        timeout_ms: 10_000,
    },
};
