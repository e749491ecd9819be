mod attach_worker;
mod destroy_plant;
mod fertilize_plant;
mod harvest_plant;
mod kill_plant;
mod patrol;
mod plant_seed;
mod serve_customer;
mod water_plant;
