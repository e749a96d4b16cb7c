mod home_page_test;
mod submit_form_test;
