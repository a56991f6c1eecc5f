mod backup;
mod readiness;
mod support;
mod vpn;
