mod loading;
mod resolve;
