mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod image_upload;
pub use image_upload::ImageUpload;

mod finance;
pub use finance::FinanceTracker;

mod community;
pub use community::Community;

mod game;
pub use game::GameDashboard;

mod schemes;
pub use schemes::GovtSchemes;

mod not_found;
pub use not_found::NotFound;
