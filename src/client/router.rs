use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresEmployer, RequiresLoggedIn};
use crate::client::route::{
    AllInvoices, Calendar, Clients, Dashboard, EmployeeView, Employees, Invoices, Landing, Login,
    NotFound, Profile, Register, Settings, TimeTracking,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Landing {},

        #[route("/login")]
        Login {},

        #[route("/register")]
        Register {},
    #[end_layout]

    #[layout(RequiresLoggedIn)]
        #[route("/dashboard")]
        Dashboard {},

        #[route("/calendar")]
        Calendar {},

        #[route("/time")]
        TimeTracking {},

        #[route("/profile")]
        Profile {},
    #[end_layout]

    #[layout(RequiresEmployer)]
        #[route("/clients")]
        Clients {},

        #[route("/employees")]
        Employees {},

        #[route("/employees/:id")]
        EmployeeView { id: i32 },

        #[nest("/invoices")]
            #[route("/")]
            Invoices {},

            #[route("/all")]
            AllInvoices {},
        #[end_nest]

        #[route("/settings")]
        Settings {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
