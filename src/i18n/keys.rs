//! Translation keys resolved by the views.
//!
//! Keys are opaque strings; these constants keep view code free of typos
//! that would otherwise only show up as echoed keys on screen.

// Navigation
pub const HOME: &str = "home";
pub const ABOUT: &str = "about";
pub const BLOG: &str = "blog";
pub const DASHBOARD: &str = "dashboard";
pub const LOGIN: &str = "login";
pub const SIGNUP: &str = "signup";
pub const RESOURCES: &str = "resources";
pub const FIND_TEACHER: &str = "findTeacher";
pub const BECOME_TEACHER: &str = "becomeTeacher";
pub const LOGOUT: &str = "logout";
pub const LOGGED_OUT: &str = "loggedOut";
pub const LOGGED_OUT_TEXT: &str = "loggedOutText";
pub const LOGOUT_FAILED: &str = "logoutFailed";
pub const LOGOUT_FAILED_TEXT: &str = "logoutFailedText";

// Auth forms
pub const SUCCESS_LOGIN: &str = "successLogin";
pub const FAILED_LOGIN: &str = "failedLogin";
pub const TRY_AGAIN: &str = "tryAgain";
pub const OK: &str = "ok";
pub const CAPTCHA_VALIDATED: &str = "captchaValidated";
pub const INVALID_CAPTCHA: &str = "invalidCaptcha";
pub const PLEASE_TRY_AGAIN: &str = "pleaseTryAgain";
pub const CAPTCHA_REQUIRED: &str = "captchaRequired";
pub const PLEASE_VERIFY_CAPTCHA: &str = "pleaseVerifyCaptcha";
pub const TERMS_REQUIRED: &str = "termsRequired";
pub const ACCEPT_TERMS: &str = "acceptTerms";
pub const NAME_REQUIRED: &str = "nameRequired";
pub const EMAIL_REQUIRED: &str = "emailRequired";
pub const INVALID_EMAIL: &str = "invalidEmail";
pub const PASSWORD_REQUIRED: &str = "passwordRequired";
pub const PASSWORD_MIN_LENGTH: &str = "passwordMinLength";
pub const PASSWORD_PATTERN: &str = "passwordPattern";
pub const IMAGE_UPLOAD_FAILED: &str = "imageUploadFailed";
pub const IMAGE_UPLOAD_FAILED_TEXT: &str = "imageUploadFailedText";
pub const USER_CREATED: &str = "userCreated";
pub const SIGNUP_FAILED: &str = "signupFailed";

// Tutor booking
pub const LOGIN_TO_BOOK: &str = "loginToBook";
pub const ALREADY_BOOKED: &str = "alreadyBooked";
pub const BOOKING_SUCCESS: &str = "bookingSuccess";
pub const BOOKING_FAILED: &str = "bookingFailed";
pub const TUTOR_NOT_FOUND: &str = "tutorNotFound";
pub const FAILED_TO_LOAD_TUTOR: &str = "failedToLoadTutor";

// Payment
pub const PAYMENT_SUCCESS: &str = "paymentSuccess";
pub const BOOKING_CONFIRMED: &str = "bookingConfirmed";
pub const PAYMENT_UNEXPECTED_ERROR: &str = "paymentUnexpectedError";
pub const PAYMENT_NOT_READY: &str = "paymentNotReady";
pub const PAYMENT_NOT_COMPLETED: &str = "paymentNotCompleted";
pub const PAYMENT_ALREADY_COMPLETED: &str = "paymentAlreadyCompleted";

// Jobs
pub const SUCCESS: &str = "success";
pub const ERROR: &str = "error";
pub const JOB_POSTED: &str = "jobPosted";
pub const JOB_POST_FAILED: &str = "jobPostFailed";
pub const PAYMENT_REQUIRED: &str = "paymentRequired";
pub const JOB_FEE_NOTICE: &str = "jobFeeNotice";
pub const PAY_FEE: &str = "payFee";

// Messages
pub const MESSAGE_MARKED_READ: &str = "messageMarkedRead";
pub const MESSAGE_DELETED: &str = "messageDeleted";
pub const DELETE_MESSAGE_CONFIRM: &str = "deleteMessageConfirm";
pub const FAILED_TO_LOAD_MESSAGES: &str = "failedToLoadMessages";

// Blog
pub const FAILED_TO_LOAD_BLOGS: &str = "failedToLoadBlogs";
