#[cfg(test)]
mod common;

#[cfg(test)]
mod button_tests;

#[cfg(test)]
mod field_tests;

#[cfg(test)]
mod toggle_tests;

#[cfg(test)]
mod radio_tests;

#[cfg(test)]
mod phone_tests;

#[cfg(test)]
mod creatable_tests;

#[cfg(test)]
mod tabs_tests;

#[cfg(test)]
mod avatar_tests;

#[cfg(test)]
mod pagination_tests;

#[cfg(test)]
mod dropdown_tests;

#[cfg(test)]
mod slider_tests;

#[cfg(test)]
mod display_tests;
