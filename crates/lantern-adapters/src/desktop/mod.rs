mod launcher;

pub use launcher::DesktopLauncher;
