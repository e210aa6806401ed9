pub mod eligibility_service;
pub mod notification_service;

pub use eligibility_service::EligibilityService;
pub use notification_service::NotificationService;
